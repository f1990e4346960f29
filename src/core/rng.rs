//! Injectable randomness for board setup and random players.
//!
//! ## Key Features
//!
//! - **Injectable**: Rules and players only see the `RandomSource` trait,
//!   so tests can script the exact sequence of draws
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for obstacles and players
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use ataxx_engine::core::{GameRng, RandomSource};
//!
//! let rng = GameRng::new(42);
//! let mut obstacles = rng.for_context("obstacles");
//! let mut obstacles_again = GameRng::new(42).for_context("obstacles");
//!
//! assert_eq!(obstacles.gen_index(7), obstacles_again.gen_index(7));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Draw an integer uniformly from `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn gen_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_index(&mut self, bound: usize) -> usize {
        (**self).gen_index(bound)
    }
}

/// Seeded ChaCha8 generator.
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

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The seed this stream was created from.
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

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
