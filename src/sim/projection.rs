//! Boundary projection seam
//!
//! The simulation never builds a camera; the caller hands in whatever maps a
//! plane position to the space the `[-1, 1]` bound is checked in.

use glam::{Mat4, Vec2, Vec4};

/// Maps a plane position to its projected bound for the current frame
pub trait BoundsProjector {
    fn project(&self, position: Vec2) -> Vec2;
}

/// Raw clip-space `xy` of `(x, y, 0, 1)`; no perspective divide
impl BoundsProjector for Mat4 {
    #[inline]
    fn project(&self, position: Vec2) -> Vec2 {
        let clip = *self * Vec4::new(position.x, position.y, 0.0, 1.0);
        Vec2::new(clip.x, clip.y)
    }
}

impl<P: BoundsProjector + ?Sized> BoundsProjector for &P {
    #[inline]
    fn project(&self, position: Vec2) -> Vec2 {
        (**self).project(position)
    }
}

/// Adapts a closure into a projector
pub struct FnProjector<F>(pub F);

impl<F: Fn(Vec2) -> Vec2> BoundsProjector for FnProjector<F> {
    #[inline]
    fn project(&self, position: Vec2) -> Vec2 {
        (self.0)(position)
    }
}
