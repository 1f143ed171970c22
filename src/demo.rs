//! Demo context
//!
//! Owns the clock, simulation and camera settings for one running demo,
//! and runs one animation frame at a time.

use glam::Mat4;

use crate::renderer::{ObjectInstance, OrbitCamera};
use crate::settings::{ConfigError, SimConfig};
use crate::sim::{FrameClock, SimEvent, Simulation, tick};

/// Output of one animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Seconds since start
    pub time: f32,
    /// Delta time the simulation advanced by
    pub dt: f32,
    pub events: Vec<SimEvent>,
    /// One entry per live object, in creation order
    pub instances: Vec<ObjectInstance>,
    /// Inverse view-projection for the skybox pass
    pub skybox_inverse: Mat4,
}

/// Everything one demo instance needs between frames
#[derive(Debug, Clone)]
pub struct Demo {
    sim: Simulation,
    clock: FrameClock,
}

impl Demo {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let clock = FrameClock::new(config.max_frame_dt);
        let sim = Simulation::new(config)?;
        log::info!("Demo initialized with seed: {}", sim.seed());
        Ok(Self { sim, clock })
    }

    /// Run one animation frame at host time `timestamp_ms`
    pub fn frame(&mut self, timestamp_ms: f64) -> Frame {
        let time = self.clock.tick(timestamp_ms);
        let camera = OrbitCamera::at_time(&self.sim.config().camera, time.time);
        let events = tick(&mut self.sim, time.dt, &camera);

        let size_factor = self.sim.config().size_factor;
        let instances = self
            .sim
            .objects()
            .iter()
            .map(|obj| ObjectInstance::from_object(obj, &camera, size_factor))
            .collect();

        Frame {
            time: time.time,
            dt: time.dt,
            events,
            instances,
            skybox_inverse: camera.skybox_view_proj_inverse(),
        }
    }

    /// Palette entry for a texture index
    pub fn texture_name(&self, index: usize) -> Option<&str> {
        self.sim.config().palette.get(index).map(String::as_str)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Start over from the seed object
    pub fn restart(&mut self) {
        self.sim.restart();
        self.clock.reset();
        log::info!("Demo restarted with seed: {}", self.sim.seed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ChildActivation;

    /// Synthetic 60 Hz timestamps
    fn run(demo: &mut Demo, frames: u32) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for n in 1..=frames {
            events.extend(demo.frame(n as f64 * 1000.0 / 60.0).events);
        }
        events
    }

    #[test]
    fn test_frame_produces_instance_per_object() {
        let mut demo = Demo::new(SimConfig::with_seed(1)).unwrap();
        let frame = demo.frame(16.0);
        assert_eq!(frame.instances.len(), demo.simulation().live_count());
        assert!((frame.dt - 0.016).abs() < 1e-6);
        assert_eq!(demo.texture_name(frame.instances[0].texture_index as usize), Some("canyon.jpg"));
    }

    #[test]
    fn test_determinism() {
        // Two demos with the same seed should produce identical results
        let mut a = Demo::new(SimConfig::with_seed(99999)).unwrap();
        let mut b = Demo::new(SimConfig::with_seed(99999)).unwrap();
        let ea = run(&mut a, 3000);
        let eb = run(&mut b, 3000);
        assert_eq!(ea, eb);
        assert_eq!(a.simulation().objects(), b.simulation().objects());
    }

    #[test]
    fn test_long_run_respects_invariants() {
        let mut demo = Demo::new(SimConfig {
            spawn_threshold: 2,
            ..SimConfig::with_seed(2024)
        })
        .unwrap();
        let events = run(&mut demo, 20_000);
        let sim = demo.simulation();
        assert!(sim.live_count() <= sim.config().max_objects);
        assert!(events.iter().any(|e| matches!(e, SimEvent::Bounced { .. })));
        for e in &events {
            if let SimEvent::TextureChanged { from, to, .. } = e {
                assert_ne!(from, to);
            }
        }
        for obj in sim.objects() {
            assert!(obj.texture_index < sim.config().palette.len());
            assert!(obj.position.is_finite());
        }
    }

    #[test]
    fn test_both_activation_modes_respect_cap() {
        let same = SimConfig {
            spawn_threshold: 1,
            ..SimConfig::with_seed(5)
        };
        let next = SimConfig {
            child_activation: ChildActivation::NextFrame,
            ..same.clone()
        };
        let mut a = Demo::new(same).unwrap();
        let mut b = Demo::new(next).unwrap();
        run(&mut a, 5000);
        run(&mut b, 5000);
        assert!(a.simulation().live_count() <= 3);
        assert!(b.simulation().live_count() <= 3);
    }

    #[test]
    fn test_restart() {
        let mut demo = Demo::new(SimConfig::with_seed(8)).unwrap();
        run(&mut demo, 600);
        demo.restart();
        assert_eq!(demo.simulation().live_count(), 1);
        assert_eq!(demo.simulation().frame_index(), 0);
        let frame = demo.frame(16.0);
        assert!((frame.dt - 0.016).abs() < 1e-6);
    }
}
