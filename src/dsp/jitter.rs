//! VCO drift emulation.
//!
//! An analog oscillator never sits exactly on pitch: it wanders slowly with
//! temperature and jitters slightly from cycle to cycle. The jitter source
//! produces a pitch-code offset (128 units per semitone) once per oscillator
//! block, made of:
//!
//! - a slow drift: a heavily smoothed random walk, up to about ±12 cents at
//!   full depth;
//! - a fast jitter: fresh noise each block, up to about ±2 cents.
//!
//! Depth 0 returns exactly zero, so a voice with drift off is bit-exact
//! repeatable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Highest drift amount on the parameter.
pub const MAX_DRIFT: i32 = 4;

const DEFAULT_SEED: u64 = 0x4a17_7e12;

/// Source of pitch offsets for a given depth.
pub trait JitterSource: Send {
    fn render(&mut self, depth: i32) -> i32;
}

#[derive(Debug, Clone)]
pub struct VcoJitter {
    rng: SmallRng,
    // slow random walk, 16.16 fixed point in pitch code units
    drift: i32,
}

impl VcoJitter {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            drift: 0,
        }
    }
}

impl Default for VcoJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for VcoJitter {
    fn render(&mut self, depth: i32) -> i32 {
        let depth = depth.clamp(0, MAX_DRIFT);
        if depth == 0 {
            return 0;
        }

        // the walk target is ±16 pitch units; approach it slowly
        let target: i32 = self.rng.gen_range(-16..=16) << 16;
        self.drift += (target - self.drift) >> 9;
        let fast: i32 = self.rng.gen_range(-3..=3);

        ((self.drift >> 16) + fast) * depth / MAX_DRIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_is_silent() {
        let mut jitter = VcoJitter::new();
        for _ in 0..1000 {
            assert_eq!(jitter.render(0), 0);
        }
    }

    #[test]
    fn offsets_stay_small() {
        let mut jitter = VcoJitter::new();
        for _ in 0..20_000 {
            let offset = jitter.render(MAX_DRIFT);
            assert!(offset.abs() <= 19, "offset {offset} out of bounds");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = VcoJitter::with_seed(5);
        let mut b = VcoJitter::with_seed(5);
        for _ in 0..500 {
            assert_eq!(a.render(3), b.render(3));
        }
    }

    #[test]
    fn full_depth_moves() {
        let mut jitter = VcoJitter::new();
        let moved = (0..2000).any(|_| jitter.render(MAX_DRIFT) != 0);
        assert!(moved);
    }
}
