//! Deterministic simulation module
//!
//! All bounce/spawn logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies; the camera comes in as a `BoundsProjector`

pub mod clock;
pub mod latch;
pub mod object;
pub mod projection;
pub mod random;
pub mod state;
pub mod step;
pub mod tick;

pub use clock::{FrameClock, FrameTime};
pub use latch::EdgeTrigger;
pub use object::{Axis, AxisSign, AxisSigns, MovableObject};
pub use projection::{BoundsProjector, FnProjector};
pub use random::RngState;
pub use state::{SimEvent, Simulation};
pub use step::{Population, StepOutcome, split_size, step, try_change_texture, try_spawn};
pub use tick::tick;
