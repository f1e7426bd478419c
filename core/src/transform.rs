//! Transform component producing model matrices.

use crate::math::{
    self, quat_from_rotation_x, quat_from_rotation_y, quat_from_rotation_z, quat_rotate_vec3,
    Mat4, Quat, Vec3,
};

/// Position, rotation, and scale for placing an object in 3D space.
///
/// Applications hold one of these per object and pass it by value or
/// reference; there is no shared module-level state.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create a transform from position, Euler angles (radians), and scale.
    ///
    /// Rotations apply in Y (yaw), X (pitch), Z (roll) order.
    pub fn from_components(position: Vec3, rotation_euler: Vec3, scale: Vec3) -> Self {
        let rotation = quat_from_rotation_y(rotation_euler.y)
            * quat_from_rotation_x(rotation_euler.x)
            * quat_from_rotation_z(rotation_euler.z);
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Get the model matrix for this transform.
    pub fn matrix(&self) -> Mat4 {
        math::mat4_from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the normal matrix (inverse transpose of the model matrix).
    ///
    /// Falls back to identity for non-invertible matrices (zero scale).
    pub fn normal_matrix(&self) -> Mat4 {
        self.matrix()
            .try_inverse()
            .unwrap_or_else(Mat4::identity)
            .transpose()
    }

    /// Get forward direction (local -Z in world space).
    pub fn forward(&self) -> Vec3 {
        quat_rotate_vec3(self.rotation, -Vec3::z())
    }

    /// Get right direction (local +X in world space).
    pub fn right(&self) -> Vec3 {
        quat_rotate_vec3(self.rotation, Vec3::x())
    }

    /// Get up direction (local +Y in world space).
    pub fn up(&self) -> Vec3 {
        quat_rotate_vec3(self.rotation, Vec3::y())
    }

    /// Translate by an offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate by Euler angles (radians), Y-X-Z order.
    pub fn rotate_euler(&mut self, euler: Vec3) {
        let delta = quat_from_rotation_y(euler.y)
            * quat_from_rotation_x(euler.x)
            * quat_from_rotation_z(euler.z);
        self.rotation = delta * self.rotation;
    }
}
