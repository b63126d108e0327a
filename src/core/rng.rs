//! Deterministic random number generation.
//!
//! Combat resolution draws randomness (damage rolls, arrow placement,
//! trick outcomes) through the `RandomSource` trait so it can be injected.
//! `GameRng` is the production source.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Resumable**: A match store can checkpoint the stream next to the
//!   state snapshot and continue it after a restart
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use grid_duel::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.roll(1, 6), b.roll(1, 6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness for combat resolution.
///
/// Implementations must be deterministic for a given construction so that
/// a match can be reproduced from its seed and action sequence.
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Returns `min` when `max <= min`.
    fn roll(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Index chosen with probability proportional to its weight.
    ///
    /// Returns `None` if weights are empty or all zero.
    fn pick_weighted(&mut self, weights: &[u32]) -> Option<usize>;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }

        let mut threshold = self.inner.gen_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            let weight = u64::from(weight);
            if threshold < weight {
                return Some(i);
            }
            threshold -= weight;
        }

        None
    }
}

/// Serializable RNG state for checkpointing alongside a match snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(0, 1000), rng2.roll(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.roll(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.roll(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let value = rng.roll(1, 3);
            assert!((1..=3).contains(&value));
        }
        assert_eq!(rng.roll(5, 5), 5);
        assert_eq!(rng.roll(5, 2), 5);
    }

    #[test]
    fn test_pick_weighted() {
        let mut rng = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng.pick_weighted(&[100, 0, 0]), Some(0));
            assert_eq!(rng.pick_weighted(&[0, 0, 5]), Some(2));
        }

        assert_eq!(rng.pick_weighted(&[]), None);
        assert_eq!(rng.pick_weighted(&[0, 0]), None);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.roll(0, 1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll(0, 1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll(0, 1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
