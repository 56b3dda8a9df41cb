use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::Error;

/// Pinhole camera looking from `position` towards `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Sets vertical field of view, in radians.
    pub fn with_fov_y(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y;
        self
    }

    pub fn with_near(mut self, near: f32) -> Self {
        self.near = near;
        self
    }

    pub fn with_far(mut self, far: f32) -> Self {
        self.far = far;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns inverse of the view-projection matrix, used to turn clip-space
    /// coordinates back into world-space.
    pub fn projection_to_world(
        &self,
        aspect_ratio: f32,
    ) -> Result<Mat4, Error> {
        if !(self.fov_y > 0.0 && self.fov_y < PI) {
            return Err(Error::InvalidCamera(
                "field of view must lie within (0, pi)",
            ));
        }

        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::InvalidCamera(
                "clipping planes must satisfy 0 < near < far",
            ));
        }

        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(Error::InvalidCamera("aspect ratio must be positive"));
        }

        let forward = self.target - self.position;

        if forward.length_squared() == 0.0 {
            return Err(Error::InvalidCamera(
                "position and target must not overlap",
            ));
        }

        if forward.cross(self.up).length_squared() == 0.0 {
            return Err(Error::InvalidCamera(
                "up vector must not be parallel to the view direction",
            ));
        }

        let projection =
            Mat4::perspective_rh(self.fov_y, aspect_ratio, self.near, self.far);

        let view = Mat4::look_at_rh(self.position, self.target, self.up);

        Ok((projection * view).inverse())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: PI / 4.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
