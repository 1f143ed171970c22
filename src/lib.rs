//! Bouncing Cubes - textured objects bouncing around an orbiting camera's view
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bounces, texture swaps, spawning)
//! - `renderer`: Camera and per-object draw parameters handed to a GPU backend
//! - `demo`: Per-demo context wiring clock, camera and simulation together
//! - `settings`: Data-driven configuration

pub mod demo;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use demo::{Demo, Frame};
pub use settings::{CameraConfig, ChildActivation, ConfigError, SeedObject, SimConfig};

use glam::{Quat, Vec2, Vec3};

/// Simulation defaults
pub mod consts {
    /// Live object cap
    pub const MAX_OBJECTS: usize = 3;
    /// Y-bounces between spawns
    pub const SPAWN_THRESHOLD: u32 = 8;
    /// X-bounces between texture swaps (a quarter of the spawn threshold)
    pub const TEXTURE_CHANGE_THRESHOLD: u32 = SPAWN_THRESHOLD / 4;
    /// Rendered scale per unit of integer object size
    pub const SIZE_FACTOR: f32 = 0.1;
    /// Largest delta time fed to the simulation in one frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Normalized device range edge
    pub const BOUND_LIMIT: f32 = 1.0;

    /// Camera orbit speed around +Y (radians/sec)
    pub const CAMERA_ROTATION_SPEED: f32 = 0.1;
    /// Vertical field of view (radians)
    pub const CAMERA_FOV: f32 = std::f32::consts::PI * 0.3;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 100.0;
    /// Camera eye before orbiting
    pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 5.0];

    /// Texture palette shipped with the demo
    pub const TEXTURE_FILES: [&str; 10] = [
        "color.jpg",
        "night.jpg",
        "abstract.jpg",
        "flowers.png",
        "canyon.jpg",
        "colorful.jpg",
        "mercury.jpg",
        "watercolor.jpg",
        "yellow.jpg",
        "red.jpg",
    ];
}

/// Lift a plane position into world space, rotated about +Y by `angle`
#[inline]
pub fn plane_to_world(pos: Vec2, angle: f32) -> Vec3 {
    rotate_about_y(pos.extend(0.0), angle)
}

/// Rotate a point about the +Y axis through the origin
#[inline]
pub fn rotate_about_y(point: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * point
}
