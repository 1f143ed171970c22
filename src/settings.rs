//! Simulation configuration
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::AxisSign;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// When a child spawned mid-frame gets its first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildActivation {
    /// Live list is walked by index as it grows, so the child steps this frame
    #[default]
    SameFrame,
    /// Only objects alive at frame start are stepped; the child waits a frame
    NextFrame,
}

/// Orbiting camera parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Orbit speed around +Y (radians/sec)
    pub rotation_speed: f32,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Viewport width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position at time zero
    pub eye: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: CAMERA_ROTATION_SPEED,
            fov: CAMERA_FOV,
            aspect: 16.0 / 9.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: CAMERA_EYE,
        }
    }
}

/// Initial state of the single object present at start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedObject {
    pub position: [f32; 2],
    pub direction: [f32; 2],
    pub speed: [f32; 2],
    pub signs: [AxisSign; 2],
    pub rotation: [f32; 2],
    pub rotation_speed: [f32; 2],
    pub texture_index: usize,
    pub size: u32,
    pub texture_repeat: f32,
}

impl Default for SeedObject {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            direction: [0.5, 0.5],
            speed: [1.0, 1.0],
            signs: [AxisSign::Forward, AxisSign::Forward],
            rotation: [0.0, 0.0],
            rotation_speed: [0.0, 0.0],
            texture_index: 4,
            size: 4,
            texture_repeat: 1.0,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for reproducible runs
    pub seed: u64,
    /// Live object cap; spawning stops once reached
    pub max_objects: usize,
    /// Y-bounce count multiple that spawns a child
    pub spawn_threshold: u32,
    /// X-bounce count multiple that swaps texture
    pub texture_change_threshold: u32,
    /// Texture identifiers, indexed by `texture_index`
    pub palette: Vec<String>,
    /// Rendered scale per unit of integer object size
    pub size_factor: f32,
    /// Clamp for a single frame's delta time (seconds)
    pub max_frame_dt: f32,
    pub child_activation: ChildActivation,
    pub seed_object: SeedObject,
    pub camera: CameraConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_objects: MAX_OBJECTS,
            spawn_threshold: SPAWN_THRESHOLD,
            texture_change_threshold: TEXTURE_CHANGE_THRESHOLD,
            palette: TEXTURE_FILES.iter().map(|s| s.to_string()).collect(),
            size_factor: SIZE_FACTOR,
            max_frame_dt: MAX_FRAME_DT,
            child_activation: ChildActivation::default(),
            seed_object: SeedObject::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl SimConfig {
    /// Default config with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if self.max_objects == 0 {
            return invalid("max_objects must be at least 1".into());
        }
        if self.spawn_threshold == 0 {
            return invalid("spawn_threshold must be at least 1".into());
        }
        if self.texture_change_threshold == 0 {
            return invalid("texture_change_threshold must be at least 1".into());
        }
        if self.palette.len() < 2 {
            return invalid(format!(
                "palette needs at least 2 textures, got {}",
                self.palette.len()
            ));
        }
        if self.seed_object.texture_index >= self.palette.len() {
            return invalid(format!(
                "seed texture index {} outside palette of {}",
                self.seed_object.texture_index,
                self.palette.len()
            ));
        }
        if !self.size_factor.is_finite() || self.size_factor < 0.0 {
            return invalid(format!("size_factor must be >= 0, got {}", self.size_factor));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt < 0.0 {
            return invalid(format!(
                "max_frame_dt must be >= 0, got {}",
                self.max_frame_dt
            ));
        }
        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.far > cam.near && cam.aspect > 0.0 && cam.fov > 0.0) {
            return invalid(format!(
                "camera needs 0 < near < far and positive fov/aspect, got {cam:?}"
            ));
        }
        Ok(())
    }
}
