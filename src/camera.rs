use glam::{Mat4, Vec3};

use crate::config::NEAR_PLANE;

/// Camera placement for one frame: where the camera sits and what it looks
/// at. Produced by [`crate::Player::camera`]; the renderer turns it into
/// matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraRig {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(fov_degrees: f32, aspect: f32, render_distance: f32) -> Mat4 {
        Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, NEAR_PLANE, render_distance)
    }

    pub fn view_projection(&self, fov_degrees: f32, aspect: f32, render_distance: f32) -> Mat4 {
        Self::projection_matrix(fov_degrees, aspect, render_distance) * self.view_matrix()
    }
}
