//! Cylinder mesh generation (with end caps)

use std::f32::consts::PI;

use super::MeshData;

/// Generate a cylinder mesh along the Z axis
///
/// # Arguments
/// * `radius` - Cylinder radius
/// * `length` - Cylinder length (height along Z)
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_cylinder_mesh(radius: f32, length: f32) -> MeshData {
    use crate::constants::BODY_SEGMENTS;
    generate_cylinder_mesh_with_segments(radius, length, BODY_SEGMENTS)
}

/// Generate a cylinder mesh with custom segment count
pub fn generate_cylinder_mesh_with_segments(radius: f32, length: f32, segments: u32) -> MeshData {
    let half_length = length / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side wall: one bottom/top vertex pair per segment step
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();

        vertices.push([radius * cos, radius * sin, -half_length]);
        normals.push([cos, sin, 0.0]);
        vertices.push([radius * cos, radius * sin, half_length]);
        normals.push([cos, sin, 0.0]);
    }

    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }

    // End caps: center vertex plus a rim with the cap normal
    let mut add_cap = |z: f32, normal: [f32; 3], flip: bool| {
        let center = vertices.len() as u32;
        vertices.push([0.0, 0.0, z]);
        normals.push(normal);

        let rim = vertices.len() as u32;
        for i in 0..=segments {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();
            vertices.push([radius * cos, radius * sin, z]);
            normals.push(normal);
        }

        for i in 0..segments {
            if flip {
                indices.extend_from_slice(&[center, rim + i + 1, rim + i]);
            } else {
                indices.extend_from_slice(&[center, rim + i, rim + i + 1]);
            }
        }
    };

    add_cap(half_length, [0.0, 0.0, 1.0], false);
    add_cap(-half_length, [0.0, 0.0, -1.0], true);

    (vertices, normals, indices)
}
