//! Per-object frame step
//!
//! Kinematics, boundary policy and the bounce-count driven triggers
//! (texture swap, child spawn). All effects are in place on the object.

use rand::Rng;

use super::object::{Axis, AxisSign, MovableObject};
use super::projection::BoundsProjector;
use super::random::{random_direction, random_rotation_speed, random_speed, random_texture_index};
use crate::consts::BOUND_LIMIT;
use crate::settings::SimConfig;

/// Live object count against its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    pub live: usize,
    pub max: usize,
}

impl Population {
    pub const fn new(live: usize, max: usize) -> Self {
        Self { live, max }
    }

    #[inline]
    pub const fn has_room(&self) -> bool {
        self.live < self.max
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    bounced: [bool; 2],
}

impl StepOutcome {
    /// True if this step opened a new crossing episode on `axis`
    pub fn bounced(&self, axis: Axis) -> bool {
        self.bounced[axis.index()]
    }

    pub fn any_bounce(&self) -> bool {
        self.bounced[0] || self.bounced[1]
    }
}

/// Advance one object by `dt` seconds.
///
/// A non-positive or non-finite `dt` only refreshes `projected_bound`.
pub fn step<P, R>(
    object: &mut MovableObject,
    dt: f32,
    projector: &P,
    population: Population,
    rng: &mut R,
) -> StepOutcome
where
    P: BoundsProjector + ?Sized,
    R: Rng + ?Sized,
{
    if !(dt.is_finite() && dt > 0.0) {
        object.projected_bound = projector.project(object.position);
        return StepOutcome::default();
    }

    object.rotation += object.rotation_speed * dt;
    object.position += object.direction * object.speed * object.signs.factors() * dt;
    object.projected_bound = projector.project(object.position);

    let mut outcome = StepOutcome::default();
    for axis in Axis::BOTH {
        outcome.bounced[axis.index()] = apply_boundary(object, axis, population, rng);
    }
    outcome
}

/// Boundary policy for one axis. Returns true on the first frame of a crossing.
fn apply_boundary<R: Rng + ?Sized>(
    object: &mut MovableObject,
    axis: Axis,
    population: Population,
    rng: &mut R,
) -> bool {
    let i = axis.index();
    let bound = object.projected_bound[i];
    let outside = bound.abs() > BOUND_LIMIT;

    if outside {
        // Re-randomized on every frame spent outside, not just the first
        object.signs.set(axis, AxisSign::inward_from(bound));
        object.direction[i] = random_direction(rng);
        object.speed[i] = random_speed(rng);
    }

    if !object.bounced[i].on_condition(outside) {
        return false;
    }

    object.bounce_count[i] += 1;
    object.rotation_speed[i] = random_rotation_speed(rng);
    match axis {
        Axis::X => object.texture_repeat += 1.0,
        Axis::Y => {
            if population.has_room() {
                object.size += 1;
            }
        }
    }
    true
}

/// Size shared by parent and child after a split
#[inline]
pub fn split_size(size: u32) -> u32 {
    if size % 2 == 0 {
        size / 4
    } else {
        (size + 1) / 2
    }
}

/// Spawn trigger: every `spawn_threshold` Y-bounces, while under the cap.
///
/// On firing the parent's size is split, its speed doubled and its rotation
/// speed halved; the returned child inherits those values.
pub fn try_spawn(
    parent: &mut MovableObject,
    population: Population,
    config: &SimConfig,
    child_id: u32,
) -> Option<MovableObject> {
    let count = parent.bounce_count.y;
    let due = count != 0 && count % config.spawn_threshold == 0;
    if !due {
        parent.spawned_child.reset();
        return None;
    }
    if parent.spawned_child.is_latched() || !population.has_room() {
        return None;
    }

    parent.size = split_size(parent.size);
    parent.speed *= 2.0;
    parent.rotation_speed *= 0.5;
    parent.spawned_child.latch();

    Some(MovableObject::child_of(parent, child_id))
}

/// Texture trigger: every `texture_change_threshold` X-bounces pick a
/// different palette entry and reset tiling. Returns `(from, to)`.
pub fn try_change_texture<R: Rng + ?Sized>(
    object: &mut MovableObject,
    config: &SimConfig,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let count = object.bounce_count.x;
    let due = count != 0 && count % config.texture_change_threshold == 0;
    if !object.texture_changed.on_condition(due) {
        return None;
    }

    let from = object.texture_index;
    let to = random_texture_index(rng, config.palette.len(), from);
    object.texture_index = to;
    object.texture_repeat = 1.0;
    Some((from, to))
}
