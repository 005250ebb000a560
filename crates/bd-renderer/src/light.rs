//! Directional light with shadow mapping

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Light uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// Light-space view-projection matrix for shadow mapping.
    pub view_proj: [[f32; 4]; 4],
    /// Light direction (xyz, w unused).
    pub direction: [f32; 4],
    /// Light color (rgb) and intensity (w).
    pub color: [f32; 4],
    /// Ambient color (rgb) and strength (w).
    pub ambient: [f32; 4],
    /// x: depth bias, y: normal bias, z: softness, w: shadows enabled.
    pub params: [f32; 4],
}

/// Directional scene light
pub struct DirectionalLight {
    /// Normalized light direction (from the light toward the scene).
    pub direction: Vec3,
    /// Light color.
    pub color: Vec3,
    /// Light intensity multiplier.
    pub intensity: f32,
    /// Ambient color.
    pub ambient_color: Vec3,
    /// Ambient strength.
    pub ambient_strength: f32,
    /// Whether the shadow pass runs.
    pub shadows_enabled: bool,
    /// Shadow depth bias.
    pub shadow_bias: f32,
    /// Normal-based shadow bias.
    pub shadow_normal_bias: f32,
    /// PCF filter size.
    pub shadow_softness: f32,
    /// Half-extent of the shadow projection volume.
    pub shadow_extent: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionalLight {
    /// Create the default key light: white at 0.8, shining from high on
    /// the +X/+Y side, with a dim neutral ambient
    pub fn new() -> Self {
        Self {
            direction: -Vec3::new(10.0, 10.0, 10.0).normalize(),
            color: Vec3::ONE,
            intensity: 0.8,
            ambient_color: Vec3::splat(0.25),
            ambient_strength: 0.6,
            shadows_enabled: true,
            shadow_bias: 0.005,
            shadow_normal_bias: 0.01,
            shadow_softness: 1.0,
            shadow_extent: 60.0,
        }
    }

    /// Set light direction (normalized)
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or(-Vec3::Z);
    }

    /// Light-space view-projection for shadow rendering around the given
    /// scene center
    pub fn light_view_proj(&self, scene_center: Vec3) -> Mat4 {
        let extent = self.shadow_extent;
        let eye = scene_center - self.direction * (extent * 2.0);
        let up = if self.direction.cross(Vec3::Z).length_squared() < 1e-6 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let view = Mat4::look_at_rh(eye, scene_center, up);
        let proj = Mat4::orthographic_rh(-extent, extent, -extent, extent, 0.1, extent * 4.0);
        proj * view
    }

    /// Get light uniform data
    pub fn uniform(&self, scene_center: Vec3) -> LightUniform {
        LightUniform {
            view_proj: self.light_view_proj(scene_center).to_cols_array_2d(),
            direction: [self.direction.x, self.direction.y, self.direction.z, 0.0],
            color: [self.color.x, self.color.y, self.color.z, self.intensity],
            ambient: [
                self.ambient_color.x,
                self.ambient_color.y,
                self.ambient_color.z,
                self.ambient_strength,
            ],
            params: [
                self.shadow_bias,
                self.shadow_normal_bias,
                self.shadow_softness,
                if self.shadows_enabled { 1.0 } else { 0.0 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let mut light = DirectionalLight::new();
        assert!((light.direction.length() - 1.0).abs() < 1e-5);
        light.set_direction(Vec3::new(0.0, 0.0, -7.0));
        assert!((light.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_uniform_encodes_shadow_toggle() {
        let mut light = DirectionalLight::new();
        assert_eq!(light.uniform(Vec3::ZERO).params[3], 1.0);
        light.shadows_enabled = false;
        assert_eq!(light.uniform(Vec3::ZERO).params[3], 0.0);
    }
}
