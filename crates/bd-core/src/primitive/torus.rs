//! Torus mesh generation (ring in the XY plane, hole along Z)

use std::f32::consts::PI;

use super::MeshData;

/// Generate a torus mesh around the Z axis
///
/// # Arguments
/// * `ring_radius` - Distance from the torus center to the tube center
/// * `tube_radius` - Radius of the tube
/// * `ring_segments` - Segments around the ring
/// * `tube_segments` - Segments around the tube
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_torus_mesh(
    ring_radius: f32,
    tube_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> MeshData {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=ring_segments {
        let theta = (i as f32 / ring_segments as f32) * 2.0 * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=tube_segments {
            let phi = (j as f32 / tube_segments as f32) * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let r = ring_radius + tube_radius * cos_phi;
            vertices.push([r * cos_theta, r * sin_theta, tube_radius * sin_phi]);
            normals.push([cos_phi * cos_theta, cos_phi * sin_theta, sin_phi]);
        }
    }

    for i in 0..ring_segments {
        for j in 0..tube_segments {
            let current = i * (tube_segments + 1) + j;
            let next = current + tube_segments + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    (vertices, normals, indices)
}
