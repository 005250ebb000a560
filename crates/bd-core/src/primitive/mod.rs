//! Primitive mesh generation for barrel sub-shapes
//!
//! Generates vertices, normals, and indices for the shapes the barrel is
//! assembled from:
//! - Cylinder (body, thread collar)
//! - Lathe (torpedo body profile)
//! - Torus (grip rings)
//! - Cone (tip)
//! - Box (scallop cut bars)
//!
//! All shapes are generated around the Z axis; the barrel builder orients
//! them onto the barrel's X axis through per-part transforms.

mod box_mesh;
mod cone;
mod cylinder;
mod lathe;
mod torus;

pub use box_mesh::generate_box_mesh;
pub use cone::generate_cone_mesh;
pub use cylinder::{generate_cylinder_mesh, generate_cylinder_mesh_with_segments};
pub use lathe::generate_lathe_mesh;
pub use torus::generate_torus_mesh;

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(vertices: &[[f32; 3]], axis: usize) -> f32 {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for v in vertices {
            min = min.min(v[axis]);
            max = max.max(v[axis]);
        }
        max - min
    }

    #[test]
    fn test_cylinder_mesh() {
        let (vertices, normals, indices) = generate_cylinder_mesh(3.0, 40.0);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len(), normals.len());
        assert!(indices.len() % 3 == 0);
        assert!((extent(&vertices, 2) - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_cone_mesh() {
        let (vertices, normals, indices) = generate_cone_mesh(2.7, 2.0, 8);
        assert_eq!(vertices.len(), normals.len());
        assert!(indices.len() % 3 == 0);
        assert!((extent(&vertices, 2) - 2.0).abs() < 0.001);
        // Apex sits at +Z
        let max_z = vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        assert!((max_z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_torus_mesh() {
        let (vertices, normals, indices) = generate_torus_mesh(3.6, 0.15, 16, 8);
        assert_eq!(vertices.len(), normals.len());
        assert!(indices.len() % 3 == 0);
        // Outer radius in the XY plane is ring + tube radius
        let max_r = vertices
            .iter()
            .map(|v| (v[0] * v[0] + v[1] * v[1]).sqrt())
            .fold(f32::MIN, f32::max);
        assert!((max_r - 3.75).abs() < 0.001);
    }

    #[test]
    fn test_box_mesh() {
        let (vertices, normals, indices) = generate_box_mesh([32.0, 0.3, 0.3]);
        assert_eq!(vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(normals.len(), 24);
        assert_eq!(indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert!((extent(&vertices, 0) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_lathe_mesh_follows_profile() {
        // Straight tube profile, radius 3 over z -20..20
        let profile = vec![(3.0, -20.0), (3.0, 0.0), (3.0, 20.0)];
        let (vertices, normals, indices) = generate_lathe_mesh(&profile, 24);
        assert_eq!(vertices.len(), normals.len());
        assert!(indices.len() % 3 == 0);
        assert!((extent(&vertices, 2) - 40.0).abs() < 0.001);
        for v in &vertices {
            let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!((r - 3.0).abs() < 0.001);
        }
    }
}
