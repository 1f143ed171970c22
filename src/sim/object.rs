//! Movable object state
//!
//! Everything a bouncing object carries between frames lives here.

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::latch::EdgeTrigger;
use crate::settings::SeedObject;

/// Plane axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component index into a `Vec2`/`UVec2`
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Travel sense along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisSign {
    /// Right on X, up on Y
    #[default]
    Forward,
    /// Left on X, down on Y
    Backward,
}

impl AxisSign {
    #[inline]
    pub const fn factor(self) -> f32 {
        match self {
            AxisSign::Forward => 1.0,
            AxisSign::Backward => -1.0,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            AxisSign::Forward => AxisSign::Backward,
            AxisSign::Backward => AxisSign::Forward,
        }
    }

    /// Sign that points back inside after leaving through the side of `bound`
    #[inline]
    pub fn inward_from(bound: f32) -> Self {
        if bound > 0.0 {
            AxisSign::Backward
        } else {
            AxisSign::Forward
        }
    }
}

/// Per-axis travel senses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSigns {
    pub x: AxisSign,
    pub y: AxisSign,
}

impl AxisSigns {
    pub const fn new(x: AxisSign, y: AxisSign) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> AxisSign {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, sign: AxisSign) {
        match axis {
            Axis::X => self.x = sign,
            Axis::Y => self.y = sign,
        }
    }

    /// Both axes flipped
    pub fn opposite(&self) -> Self {
        Self::new(self.x.opposite(), self.y.opposite())
    }

    /// Signs as a ±1 vector
    #[inline]
    pub fn factors(&self) -> Vec2 {
        Vec2::new(self.x.factor(), self.y.factor())
    }
}

/// A bouncing, texture-swapping, spawning object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovableObject {
    pub id: u32,
    /// World offset in the plane
    pub position: Vec2,
    /// `position` through the frame's view-projection (boundary signal only)
    pub projected_bound: Vec2,
    /// Per-axis unit fraction of travel
    pub direction: Vec2,
    /// Per-axis magnitude of travel
    pub speed: Vec2,
    pub signs: AxisSigns,
    pub rotation: Vec2,
    /// Radians/sec per axis
    pub rotation_speed: Vec2,
    /// Lifetime direction reversals per axis (never decreases)
    pub bounce_count: UVec2,
    /// Integer size; rendered scale is `size * size_factor`
    pub size: u32,
    /// Surface tiling, grows with X-bounces
    pub texture_repeat: f32,
    pub texture_index: usize,
    /// Per-axis bounce latches
    pub(crate) bounced: [EdgeTrigger; 2],
    pub(crate) texture_changed: EdgeTrigger,
    pub(crate) spawned_child: EdgeTrigger,
}

impl MovableObject {
    /// Build the start-of-run object from config
    pub fn from_seed(id: u32, seed: &SeedObject) -> Self {
        Self {
            id,
            position: Vec2::from(seed.position),
            projected_bound: Vec2::ZERO,
            direction: Vec2::from(seed.direction),
            speed: Vec2::from(seed.speed),
            signs: AxisSigns::new(seed.signs[0], seed.signs[1]),
            rotation: Vec2::from(seed.rotation),
            rotation_speed: Vec2::from(seed.rotation_speed),
            bounce_count: UVec2::ZERO,
            size: seed.size,
            texture_repeat: seed.texture_repeat,
            texture_index: seed.texture_index,
            bounced: [EdgeTrigger::new(); 2],
            texture_changed: EdgeTrigger::new(),
            spawned_child: EdgeTrigger::new(),
        }
    }

    /// Child carrying the parent's current motion, mirrored rotation and
    /// opposite travel senses. Counters and latches start fresh.
    pub fn child_of(parent: &MovableObject, id: u32) -> Self {
        Self {
            id,
            position: parent.position,
            projected_bound: parent.projected_bound,
            direction: parent.direction,
            speed: parent.speed,
            signs: parent.signs.opposite(),
            rotation: -parent.rotation,
            rotation_speed: parent.rotation_speed,
            bounce_count: UVec2::ZERO,
            size: parent.size,
            texture_repeat: parent.texture_repeat,
            texture_index: parent.texture_index,
            bounced: [EdgeTrigger::new(); 2],
            texture_changed: EdgeTrigger::new(),
            spawned_child: EdgeTrigger::new(),
        }
    }

    /// Whether the axis is inside a latched boundary crossing
    pub fn is_bounce_latched(&self, axis: Axis) -> bool {
        self.bounced[axis.index()].is_latched()
    }

    /// Scale handed to the renderer
    #[inline]
    pub fn render_scale(&self, size_factor: f32) -> f32 {
        self.size as f32 * size_factor
    }
}
