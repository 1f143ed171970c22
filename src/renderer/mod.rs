//! Rendering-side collaborators
//!
//! No GPU calls here: the camera feeds the simulation its bounds projection,
//! and instances carry per-object parameters to whatever backend draws them.

pub mod camera;
pub mod instance;

pub use camera::OrbitCamera;
pub use instance::{ObjectInstance, model_matrix};
