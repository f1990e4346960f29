//! Construction-time game configuration.
//!
//! The engine is configured once, before a game starts:
//! - `dim`: board side length (at least 5, odd)
//! - `obstacles`: obstacle cells placed at setup (`0..=dim*dim`)
//! - `seed`: seed for obstacle placement and random players
//!
//! Counts are signed so that values coming from deserialized input are
//! validated rather than wrapped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{GameError, Result};

/// Smallest supported board dimension.
pub const MIN_DIM: i32 = 5;

/// Board dimension used when none is configured.
pub const DEFAULT_DIM: i32 = 7;

/// Ataxx game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtaxxConfig {
    /// Board side length.
    pub dim: i32,

    /// Number of obstacle cells.
    pub obstacles: i32,

    /// Random seed. Same seed produces the same obstacle layout.
    pub seed: u64,
}

impl Default for AtaxxConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            obstacles: 0,
            seed: 42,
        }
    }
}

impl AtaxxConfig {
    /// Create a config for a board of the given dimension, without obstacles.
    #[must_use]
    pub fn new(dim: i32) -> Self {
        Self {
            dim,
            ..Self::default()
        }
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_dim(mut self, dim: i32) -> Self {
        self.dim = dim;
        self
    }

    /// Set the obstacle count.
    #[must_use]
    pub fn with_obstacles(mut self, obstacles: i32) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> i32 {
        self.dim.saturating_mul(self.dim)
    }

    /// Check the configuration.
    ///
    /// Fails if `dim < 5`, `dim` is even, or `obstacles` is negative or
    /// larger than `dim * dim`.
    pub fn validate(&self) -> Result<()> {
        let result = if self.dim < MIN_DIM {
            Err(GameError::DimensionTooSmall(self.dim))
        } else if self.dim % 2 == 0 {
            Err(GameError::DimensionNotOdd(self.dim))
        } else if self.obstacles < 0 {
            Err(GameError::NegativeObstacles(self.obstacles))
        } else if self.obstacles > self.cell_count() {
            Err(GameError::TooManyObstacles {
                requested: self.obstacles,
                available: self.cell_count(),
            })
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            warn!(dim = self.dim, obstacles = self.obstacles, %err, "rejected configuration");
        }
        result
    }
}
