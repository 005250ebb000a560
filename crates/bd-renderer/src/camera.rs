//! Orbit camera for the 3D viewport

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera position in world space.
    pub eye: [f32; 4],
}

/// Orbit camera
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Orbit target.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view (radians).
    pub fov: f32,
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Orbit yaw (radians).
    pub yaw: f32,
    /// Orbit pitch (radians).
    pub pitch: f32,
    /// Distance from target.
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters, framing the default
    /// barrel (scene units are millimeters)
    pub fn new(aspect: f32) -> Self {
        let yaw = 90.0_f32.to_radians();
        let pitch = 15.0_f32.to_radians();
        let distance = 90.0;
        let target = Vec3::ZERO;

        let x = distance * pitch.cos() * yaw.cos();
        let y = distance * pitch.cos() * yaw.sin();
        let z = distance * pitch.sin();
        let position = target + Vec3::new(x, y, z);

        Self {
            position,
            target,
            up: Vec3::Z,
            fov: 40.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 100000.0,
            yaw,
            pitch,
            distance,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    /// Pan the camera (move target)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        let scale = self.distance * 0.002;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(1.0, 10000.0);
        self.update_position_from_orbit();
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Fit camera to show the given bounding sphere
    pub fn fit_all(&mut self, center: Vec3, radius: f32) {
        self.target = center;
        self.distance = (radius * 2.5).max(1.0);
        self.update_position_from_orbit();
    }

    /// Set to top view
    pub fn set_top_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = 89.0_f32.to_radians();
        self.update_position_from_orbit();
    }

    /// Set to front view (down the barrel axis)
    pub fn set_front_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.update_position_from_orbit();
    }

    /// Set to side view
    pub fn set_side_view(&mut self) {
        self.yaw = 90.0_f32.to_radians();
        self.pitch = 0.0;
        self.update_position_from_orbit();
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new(16.0 / 9.0);
        let distance = camera.distance;
        camera.orbit(0.3, -0.2);
        assert!(((camera.position - camera.target).length() - distance).abs() < 1e-3);
    }

    #[test]
    fn test_fit_all_scales_distance() {
        let mut camera = Camera::new(1.0);
        camera.fit_all(Vec3::ZERO, 27.0);
        assert!((camera.distance - 67.5).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= 89.0_f32.to_radians() + 1e-6);
    }
}
