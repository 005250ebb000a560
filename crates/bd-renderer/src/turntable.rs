//! Idle turntable rotation for the 3D view

use glam::Mat4;

use crate::constants::turntable::{PITCH_AMPLITUDE, YAW_STEP};

/// Continuous idle rotation: a fixed yaw step per rendered frame and a
/// pitch that oscillates with wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turntable {
    yaw: f32,
    pitch: f32,
}

impl Turntable {
    /// Create a turntable at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame
    pub fn advance(&mut self, time_seconds: f64) {
        self.yaw += YAW_STEP;
        self.pitch = (time_seconds.sin() as f32) * PITCH_AMPLITUDE;
    }

    /// Current yaw (radians)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch (radians)
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotation applied on top of each part's own placement
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_z(self.yaw) * Mat4::from_rotation_x(self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_yaw_accumulates_per_frame() {
        let mut turntable = Turntable::new();
        for _ in 0..10 {
            turntable.advance(0.0);
        }
        assert!((turntable.yaw() - 10.0 * YAW_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_tracks_wall_clock() {
        let mut turntable = Turntable::new();
        turntable.advance(std::f64::consts::FRAC_PI_2);
        assert!((turntable.pitch() - PITCH_AMPLITUDE).abs() < 1e-6);
        turntable.advance(0.0);
        assert!(turntable.pitch().abs() < 1e-6);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let mut turntable = Turntable::new();
        turntable.advance(1.2);
        let p = turntable.rotation().transform_point3(Vec3::new(20.0, 0.0, 0.0));
        assert!((p.length() - 20.0).abs() < 1e-4);
    }
}
