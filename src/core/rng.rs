//! Deterministic random number generation for chamber draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of draws
//! - **Uniform**: Every chamber index is equally likely
//! - **Serializable**: O(1) state capture and restore
//!
//! The engine draws the live chamber through this wrapper rather than an
//! ambient thread-local RNG, so tests can supply a fixed seed and exercise
//! every branch (miss path, hit path, rejection path) without statistical
//! flakiness.
//!
//! ```
//! use rust_roulette::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.draw_index(9), b.draw_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic uniform-integer source for the engine.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
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

    /// Create an RNG seeded from operating-system entropy.
    ///
    /// The drawn seed is retained so `state()` still captures a
    /// reproducible checkpoint.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Draw a uniform index in `[0, bound)`.
    ///
    /// Panics if `bound` is zero; the engine validates its chamber count
    /// at construction so it never passes zero.
    pub fn draw_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
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
            assert_eq!(rng1.draw_index(9), rng2.draw_index(9));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.draw_index(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.draw_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_index_in_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.draw_index(9) < 9);
        }
    }

    #[test]
    fn test_draw_index_single_chamber() {
        let mut rng = GameRng::new(7);
        for _ in 0..10 {
            assert_eq!(rng.draw_index(1), 0);
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.draw_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.draw_index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        assert_eq!(restored.seed(), 42);
        let actual: Vec<_> = (0..10).map(|_| restored.draw_index(1000)).collect();

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

    #[test]
    fn test_from_entropy_draws_valid_indices() {
        let mut rng = GameRng::from_entropy();
        for _ in 0..100 {
            assert!(rng.draw_index(9) < 9);
        }
    }
}
