//! # Larkspur Core
//!
//! Core crate for Larkspur basic utilities: procedural mesh generation,
//! math types, transforms, and camera control.

pub mod camera;
pub mod camera_controller;
pub mod input;
pub mod math;
pub mod mesh;
pub mod transform;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version once at startup.
pub fn init() {
    log::info!("Larkspur Core v{} initialized", VERSION);
}
