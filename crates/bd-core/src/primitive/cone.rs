//! Cone mesh generation (apex at +Z, with base cap)

use std::f32::consts::PI;

use super::MeshData;

/// Generate a cone mesh along the Z axis
///
/// # Arguments
/// * `radius` - Base radius
/// * `height` - Height along Z; base at -height/2, apex at +height/2
/// * `segments` - Radial segment count
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_cone_mesh(radius: f32, height: f32, segments: u32) -> MeshData {
    let half_height = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side normals tilt outward by the slope of the flank
    let slope = (radius * radius + height * height).sqrt();
    let nr = height / slope;
    let nz = radius / slope;

    // One base/apex vertex pair per segment step so the apex keeps a
    // per-segment normal
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();

        vertices.push([radius * cos, radius * sin, -half_height]);
        normals.push([nr * cos, nr * sin, nz]);
        vertices.push([0.0, 0.0, half_height]);
        normals.push([nr * cos, nr * sin, nz]);
    }

    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 2, base + 1]);
    }

    // Base cap (facing -Z)
    let center = vertices.len() as u32;
    vertices.push([0.0, 0.0, -half_height]);
    normals.push([0.0, 0.0, -1.0]);

    let rim = vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();
        vertices.push([radius * cos, radius * sin, -half_height]);
        normals.push([0.0, 0.0, -1.0]);
    }

    for i in 0..segments {
        indices.extend_from_slice(&[center, rim + i + 1, rim + i]);
    }

    (vertices, normals, indices)
}
