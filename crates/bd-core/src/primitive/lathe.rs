//! Lathe mesh generation (a radial profile revolved around Z)

use std::f32::consts::PI;

use super::MeshData;

/// Revolve a (radius, z) profile around the Z axis
///
/// The profile is sampled as given; normals are derived from the profile
/// slope at each sample. The ends are left open, matching a lathed tube.
///
/// # Arguments
/// * `profile` - (radius, z) samples, ordered along Z
/// * `segments` - Radial segment count
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_lathe_mesh(profile: &[(f32, f32)], segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    if profile.len() < 2 {
        return (vertices, normals, indices);
    }

    for (i, &(radius, z)) in profile.iter().enumerate() {
        // Profile tangent from neighboring samples; the surface normal is
        // its in-plane perpendicular, pointing outward
        let prev = profile[i.saturating_sub(1)];
        let next = profile[(i + 1).min(profile.len() - 1)];
        let dr = next.0 - prev.0;
        let dz = next.1 - prev.1;
        let len = (dr * dr + dz * dz).sqrt().max(f32::EPSILON);
        let nr = dz / len;
        let nz = -dr / len;

        for j in 0..=segments {
            let theta = (j as f32 / segments as f32) * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();

            vertices.push([radius * cos, radius * sin, z]);
            normals.push([nr * cos, nr * sin, nz]);
        }
    }

    let ring = segments + 1;
    for i in 0..(profile.len() as u32 - 1) {
        for j in 0..segments {
            let current = i * ring + j;
            let next = current + ring;

            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    (vertices, normals, indices)
}
