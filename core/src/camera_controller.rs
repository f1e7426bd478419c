//! Camera controllers driven by input snapshots.
//!
//! Controllers never talk to a windowing library. They poll an
//! [`InputSnapshot`], so a platform layer or a test double can drive them
//! the same way.

use crate::camera::Camera;
use crate::input::{InputSnapshot, KeyCode, MouseButton};
use crate::math::{radians, Vec3};

/// Abstract camera controller.
pub trait CameraController {
    /// Advance the camera one frame from the current input snapshot.
    fn update(&mut self, camera: &mut Camera, input: &dyn InputSnapshot, dt: f32);

    /// Get the controller name for debugging.
    fn name(&self) -> &'static str;

    /// Reset the controller to default state.
    fn reset(&mut self);
}

/// Free-fly (FPS-style) camera controller.
///
/// Active only while the right mouse button is held: cursor travel turns
/// into yaw/pitch, WASD moves in the look frame, Q/E move vertically, and
/// left Shift sprints. The first cursor sample after the button goes down
/// is latched without producing a rotation, so grabbing the mouse never
/// snaps the view.
#[derive(Debug, Clone)]
pub struct FreeFlyController {
    /// Yaw in degrees.
    pub yaw: f32,
    /// Pitch in degrees, clamped to [-89, 89].
    pub pitch: f32,
    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Movement speed while left Shift is held.
    pub sprint_speed: f32,
    /// Degrees of rotation per pixel of cursor travel.
    pub mouse_sensitivity: f32,
    prev_cursor: Option<(f64, f64)>,
}

impl Default for FreeFlyController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 3.0,
            sprint_speed: 6.0,
            mouse_sensitivity: 0.1,
            prev_cursor: None,
        }
    }
}

impl FreeFlyController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom movement speed (sprint stays at double).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self.sprint_speed = speed * 2.0;
        self
    }

    /// Create with a custom mouse sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Forward direction from the current yaw and pitch.
    fn forward_direction(&self) -> Vec3 {
        let yaw = radians(self.yaw);
        let pitch = radians(self.pitch);
        Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * -yaw.cos(),
        )
        .normalize()
    }
}

impl CameraController for FreeFlyController {
    fn update(&mut self, camera: &mut Camera, input: &dyn InputSnapshot, dt: f32) {
        // Aiming and movement only while the right button is held; release
        // re-latches the cursor so the next grab starts clean.
        if !input.button_down(MouseButton::Right) {
            self.prev_cursor = None;
            return;
        }

        let (x, y) = input.cursor_position();
        if let Some((prev_x, prev_y)) = self.prev_cursor {
            let delta_x = (x - prev_x) as f32;
            let delta_y = (y - prev_y) as f32;
            self.yaw += delta_x * self.mouse_sensitivity;
            self.pitch -= delta_y * self.mouse_sensitivity;
            self.pitch = self.pitch.clamp(-89.0, 89.0);
        }
        self.prev_cursor = Some((x, y));

        let forward = self.forward_direction();
        let right = forward.cross(&Vec3::y()).normalize();
        let up = right.cross(&forward).normalize();

        let speed = if input.key_down(KeyCode::ShiftLeft) {
            self.sprint_speed
        } else {
            self.move_speed
        };
        let step = speed * dt;

        if input.key_down(KeyCode::W) {
            camera.position += forward * step;
        }
        if input.key_down(KeyCode::S) {
            camera.position -= forward * step;
        }
        if input.key_down(KeyCode::D) {
            camera.position += right * step;
        }
        if input.key_down(KeyCode::A) {
            camera.position -= right * step;
        }
        if input.key_down(KeyCode::E) {
            camera.position += up * step;
        }
        if input.key_down(KeyCode::Q) {
            camera.position -= up * step;
        }

        // The camera looks at a point along the forward axis.
        camera.target = camera.position + forward;
    }

    fn name(&self) -> &'static str {
        "FreeFly"
    }

    fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.prev_cursor = None;
    }
}
