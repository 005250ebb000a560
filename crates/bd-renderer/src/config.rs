//! Renderer configuration structures
//!
//! Configurable settings for the renderer, serializable so the frontend
//! can persist them with its preferences.

use serde::{Deserialize, Serialize};

/// Ground grid configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Whether the grid is drawn
    pub enabled: bool,
    /// Grid half-extent (mm)
    pub size: f32,
    /// Grid line spacing (mm)
    pub spacing: f32,
    /// Grid line color (RGB)
    pub line_color: [f32; 3],
    /// X-axis color (RGB)
    pub x_axis_color: [f32; 3],
    /// Y-axis color (RGB)
    pub y_axis_color: [f32; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        use crate::constants::grid;
        Self {
            enabled: false,
            size: grid::DEFAULT_SIZE,
            spacing: grid::DEFAULT_SPACING,
            line_color: grid::LINE_COLOR,
            x_axis_color: grid::X_AXIS_COLOR,
            y_axis_color: grid::Y_AXIS_COLOR,
        }
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [0.102, 0.102, 0.102, 1.0],
        }
    }
}

/// Shadow mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShadowConfig {
    /// Whether shadows are enabled
    pub enabled: bool,
    /// Shadow map resolution (512, 1024, 2048, 4096)
    pub map_size: u32,
    /// Shadow depth bias to prevent shadow acne
    pub bias: f32,
    /// Normal-based shadow bias for grazing angles
    pub normal_bias: f32,
    /// Shadow softness (PCF filter size)
    pub softness: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            map_size: 2048,
            bias: 0.005,
            normal_bias: 0.01,
            softness: 1.0,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightingConfig {
    /// Light direction (normalized, from the light toward the scene)
    pub direction: [f32; 3],
    /// Light color (RGB)
    pub color: [f32; 3],
    /// Light intensity multiplier
    pub intensity: f32,
    /// Ambient light color (RGB)
    pub ambient_color: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            direction: [-0.577, -0.577, -0.577],
            color: [1.0, 1.0, 1.0],
            intensity: 0.8,
            ambient_color: [0.25, 0.25, 0.25],
            ambient_strength: 0.6,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Zoom sensitivity multiplier
    pub zoom_sensitivity: f32,
    /// Orbit sensitivity multiplier
    pub orbit_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            near_plane: 0.1,
            far_plane: 100000.0,
            zoom_sensitivity: 0.1,
            orbit_sensitivity: 0.005,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridConfig,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Shadow settings
    #[serde(default)]
    pub shadow: ShadowConfig,
    /// Lighting settings
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}
