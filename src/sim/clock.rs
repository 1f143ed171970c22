//! Frame clock
//!
//! Turns host animation-frame timestamps into simulation delta time.

/// Timing for one animation frame (seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Host time since start
    pub time: f32,
    /// Clamped time since previous frame
    pub dt: f32,
}

/// Delta-time source fed by millisecond timestamps.
///
/// The first frame measures from zero. A timestamp earlier than the previous
/// one yields `dt = 0` so the step is a no-op.
#[derive(Debug, Clone)]
pub struct FrameClock {
    previous: f64,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            previous: 0.0,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Advance to `timestamp_ms`
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTime {
        let now = timestamp_ms * 0.001;
        let raw = now - self.previous;
        if raw < 0.0 {
            log::warn!(
                "Frame timestamp went backwards ({:.3}s -> {:.3}s)",
                self.previous,
                now
            );
        }
        self.previous = now;

        let dt = if raw.is_finite() {
            (raw as f32).clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        FrameTime {
            time: now as f32,
            dt,
        }
    }

    /// Forget history so the next frame measures from zero again
    pub fn reset(&mut self) {
        self.previous = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_from_timestamps() {
        let mut clock = FrameClock::new(1.0);
        let t = clock.tick(16.0);
        assert!((t.dt - 0.016).abs() < 1e-6);
        let t = clock.tick(48.0);
        assert!((t.dt - 0.032).abs() < 1e-6);
        assert!((t.time - 0.048).abs() < 1e-6);
    }

    #[test]
    fn test_dt_clamped_to_max() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(5000.0).dt, 0.1);
    }

    #[test]
    fn test_rollback_is_zero_dt() {
        let mut clock = FrameClock::new(1.0);
        clock.tick(500.0);
        let t = clock.tick(400.0);
        assert_eq!(t.dt, 0.0);
        // Measures from the rolled-back time afterwards
        let t = clock.tick(450.0);
        assert!((t.dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_nan_timestamp_is_zero_dt() {
        let mut clock = FrameClock::new(1.0);
        assert_eq!(clock.tick(f64::NAN).dt, 0.0);
    }
}
