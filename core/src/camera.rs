//! Camera state and projection.

use crate::math::{self, radians, Mat4, Vec3};

/// Camera projection type.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        /// Height of the view volume; width follows from the aspect ratio.
        height: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y: radians(60.0),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Perspective {
            fov_y: radians(fov_y_degrees),
            aspect,
            near,
            far,
        }
    }

    pub fn orthographic(height: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Orthographic {
            height,
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => math::perspective_rh(fov_y, aspect, near, far),
            Projection::Orthographic {
                height,
                aspect,
                near,
                far,
            } => {
                // Symmetric bounds derived from height and aspect ratio.
                let top = height / 2.0;
                let right = top * aspect;
                math::orthographic_rh(-right, right, -top, top, near, far)
            }
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        match self {
            Projection::Perspective { aspect: a, .. } => *a = aspect,
            Projection::Orthographic { aspect: a, .. } => *a = aspect,
        }
    }
}

/// Camera for viewing a scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            projection: Projection::default(),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Default::default()
        }
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        math::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get the forward direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Get the right direction.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(&self.up).normalize()
    }

    /// Update the aspect ratio from a framebuffer size.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.projection.set_aspect(width / height);
    }
}
