//! Barrel Designer Renderer
//!
//! WGPU-based 3D rendering for the barrel designer: an orbit camera, a
//! shadow-mapped directional light, an optional ground grid, and the
//! barrel part meshes spinning on an idle turntable.

pub mod camera;
pub mod config;
pub mod constants;
pub mod light;
pub mod pipeline;
pub mod renderer;
pub mod sub_renderers;
pub mod turntable;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use config::RendererConfig;
pub use light::{DirectionalLight, LightUniform};
pub use renderer::Renderer;
pub use sub_renderers::{GridRenderer, MeshRenderer};
pub use turntable::Turntable;
pub use vertex::{MeshVertex, PositionColorVertex};
