//! Simulation state
//!
//! The live object set, its RNG and the config it runs under.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::object::{Axis, MovableObject};
use super::random::RngState;
use super::step::Population;
use crate::settings::{ConfigError, SimConfig};

/// Notable things that happened during a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// First frame of a boundary crossing on `axis`
    Bounced { id: u32, axis: Axis, count: u32 },
    /// Palette entry swapped
    TextureChanged { id: u32, from: usize, to: usize },
    /// `parent` split off `child`; both now have `size`
    Spawned { parent: u32, child: u32, size: u32 },
    /// Live count reached the cap (emitted once)
    Saturated { live: usize },
}

/// All live objects plus the state needed to advance them deterministically
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(super) config: SimConfig,
    rng_state: RngState,
    pub(super) rng: Pcg32,
    /// Live objects in creation order
    pub(super) objects: Vec<MovableObject>,
    pub(super) frame_index: u64,
    pub(super) saturated: bool,
    pub(super) next_id: u32,
}

impl Simulation {
    /// Validate `config` and create the seed object
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid(SimConfig::with_seed(seed))
    }

    fn from_valid(config: SimConfig) -> Self {
        let rng_state = RngState::new(config.seed);
        let mut sim = Self {
            rng: rng_state.to_rng(),
            rng_state,
            objects: Vec::with_capacity(config.max_objects),
            frame_index: 0,
            saturated: false,
            next_id: 1,
            config,
        };

        let id = sim.next_entity_id();
        let seed = MovableObject::from_seed(id, &sim.config.seed_object);
        sim.objects.push(seed);

        log::debug!(
            "Simulation created: seed={}, max_objects={}, activation={:?}",
            sim.config.seed,
            sim.config.max_objects,
            sim.config.child_activation
        );
        sim
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Live objects in creation order
    pub fn objects(&self) -> &[MovableObject] {
        &self.objects
    }

    pub fn object(&self, id: u32) -> Option<&MovableObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn live_count(&self) -> usize {
        self.objects.len()
    }

    pub fn population(&self) -> Population {
        Population::new(self.objects.len(), self.config.max_objects)
    }

    /// Whether the cap has been reached (no more spawning or size growth)
    pub fn is_saturated(&self) -> bool {
        !self.population().has_room()
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Back to the seed object with a fresh RNG from the same seed
    pub fn restart(&mut self) {
        *self = Self::from_valid(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_OBJECTS;

    #[test]
    fn test_new_has_single_seed_object() {
        let sim = Simulation::with_seed(1);
        assert_eq!(sim.live_count(), 1);
        assert_eq!(sim.objects()[0].id, 1);
        assert_eq!(sim.population(), Population::new(1, MAX_OBJECTS));
        assert!(!sim.is_saturated());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimConfig {
            max_objects: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_single_object_cap_is_saturated_from_start() {
        let config = SimConfig {
            max_objects: 1,
            ..SimConfig::default()
        };
        let sim = Simulation::new(config).unwrap();
        assert!(sim.is_saturated());
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut sim = Simulation::with_seed(1);
        let a = sim.next_entity_id();
        let b = sim.next_entity_id();
        assert_eq!(a, 2);
        assert_eq!(b, 3);
    }

    #[test]
    fn test_restart_resets_ids_and_objects() {
        let mut sim = Simulation::with_seed(5);
        sim.next_entity_id();
        sim.frame_index = 40;
        sim.restart();
        assert_eq!(sim.frame_index(), 0);
        assert_eq!(sim.next_entity_id(), 2);
        assert_eq!(sim.seed(), 5);
    }
}
