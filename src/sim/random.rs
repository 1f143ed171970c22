//! Re-randomization draws
//!
//! Every draw takes the caller's generator so runs replay from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Direction fraction in {0.0, 0.1, ..., 0.9}
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(0..10u8) as f32 / 10.0
}

/// Integer speed in 1..=10
pub fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(1..=10u8) as f32
}

/// Integer rotation speed in -10..=-1
pub fn random_rotation_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-10..=-1i8) as f32
}

/// Uniform palette index in `0..len`, never equal to `exclude`.
///
/// `len` must be at least 2 when `exclude < len`.
pub fn random_texture_index<R: Rng + ?Sized>(rng: &mut R, len: usize, exclude: usize) -> usize {
    if exclude >= len {
        return rng.random_range(0..len);
    }
    let pick = rng.random_range(0..len - 1);
    if pick >= exclude { pick + 1 } else { pick }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        if self.stream == 0 {
            Pcg32::seed_from_u64(self.seed)
        } else {
            Pcg32::new(self.seed, self.stream)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_ranges() {
        let mut rng = RngState::new(7).to_rng();
        for _ in 0..1000 {
            let d = random_direction(&mut rng);
            assert!((0.0..=0.9).contains(&d));
            assert!((d * 10.0 - (d * 10.0).round()).abs() < 1e-5);

            let s = random_speed(&mut rng);
            assert!((1.0..=10.0).contains(&s));
            assert_eq!(s.fract(), 0.0);

            let r = random_rotation_speed(&mut rng);
            assert!((-10.0..=-1.0).contains(&r));
        }
    }

    #[test]
    fn test_texture_index_excludes_current() {
        let mut rng = RngState::new(99).to_rng();
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let idx = random_texture_index(&mut rng, 10, 4);
            assert_ne!(idx, 4);
            seen[idx] = true;
        }
        // Every other index shows up
        for (i, hit) in seen.iter().enumerate() {
            assert_eq!(*hit, i != 4, "index {i}");
        }
    }

    #[test]
    fn test_texture_index_two_entry_palette_alternates() {
        let mut rng = RngState::new(3).to_rng();
        assert_eq!(random_texture_index(&mut rng, 2, 0), 1);
        assert_eq!(random_texture_index(&mut rng, 2, 1), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngState::new(1234).to_rng();
        let mut b = RngState::new(1234).to_rng();
        for _ in 0..50 {
            assert_eq!(random_speed(&mut a), random_speed(&mut b));
        }
    }
}
