//! Rendering constants

/// Viewport constants
pub mod viewport {
    /// Scene clear color (matches the dark studio background)
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
        r: 0.102,
        g: 0.102,
        b: 0.102,
        a: 1.0,
    };

    /// MSAA sample count for the main pass
    pub const SAMPLE_COUNT: u32 = 4;
}

/// Shadow mapping constants
pub mod shadow {
    /// Default shadow map resolution
    pub const SHADOW_MAP_SIZE: u32 = 2048;

    /// Shadow map texture format
    pub const SHADOW_MAP_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
}

/// Ground grid constants (millimeters)
pub mod grid {
    /// Default grid half-extent
    pub const DEFAULT_SIZE: f32 = 40.0;

    /// Default grid line spacing
    pub const DEFAULT_SPACING: f32 = 5.0;

    /// Grid plane offset below the barrel axis
    pub const OFFSET_Z: f32 = -15.0;

    /// Default grid line color
    pub const LINE_COLOR: [f32; 3] = [0.3, 0.3, 0.3];

    /// X axis line color
    pub const X_AXIS_COLOR: [f32; 3] = [0.8, 0.2, 0.2];

    /// Y axis line color
    pub const Y_AXIS_COLOR: [f32; 3] = [0.2, 0.8, 0.2];
}

/// Turntable constants
pub mod turntable {
    /// Yaw increment per rendered frame (radians)
    pub const YAW_STEP: f32 = 0.005;

    /// Pitch oscillation amplitude (radians)
    pub const PITCH_AMPLITUDE: f32 = 0.1;
}
