//! Edge-triggered threshold latch

use serde::{Deserialize, Serialize};

/// Fires once when its condition becomes true, then stays quiet until the
/// condition has been observed false again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTrigger {
    latched: bool,
}

impl EdgeTrigger {
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Feed this frame's condition. Returns true on the rising edge only.
    #[inline]
    pub fn on_condition(&mut self, condition: bool) -> bool {
        if !condition {
            self.latched = false;
            return false;
        }
        if self.latched {
            return false;
        }
        self.latched = true;
        true
    }

    /// Latch without a condition check (used when firing is also gated elsewhere)
    #[inline]
    pub fn latch(&mut self) {
        self.latched = true;
    }

    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn reset(&mut self) {
        self.latched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_while_condition_holds() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.on_condition(true));
        for _ in 0..10 {
            assert!(!trigger.on_condition(true));
        }
        assert!(trigger.is_latched());
    }

    #[test]
    fn test_rearms_after_false() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.on_condition(true));
        assert!(!trigger.on_condition(false));
        assert!(!trigger.is_latched());
        assert!(trigger.on_condition(true));
    }

    #[test]
    fn test_false_never_fires() {
        let mut trigger = EdgeTrigger::new();
        assert!(!trigger.on_condition(false));
        assert!(!trigger.on_condition(false));
    }

    #[test]
    fn test_manual_latch_blocks_next_edge() {
        let mut trigger = EdgeTrigger::new();
        trigger.latch();
        assert!(!trigger.on_condition(true));
        trigger.reset();
        assert!(trigger.on_condition(true));
    }
}
