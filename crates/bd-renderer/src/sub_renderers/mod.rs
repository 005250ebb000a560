//! Built-in sub-renderers

pub mod grid;
pub mod mesh;

pub use grid::GridRenderer;
pub use mesh::{MeshData, MeshInstance, MeshRenderer};
