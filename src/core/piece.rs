//! Piece labels.
//!
//! A `Piece` marks a cell as owned by a player, or as an obstacle. Pieces
//! are compared by label, so two pieces built from the same label are the
//! same piece.

use serde::{Deserialize, Serialize};

/// Label reserved for obstacle cells.
pub const OBSTACLE_LABEL: &str = "*";

/// An identity token for a player's mark or the obstacle sentinel.
///
/// ```
/// use ataxx_engine::core::Piece;
///
/// let x = Piece::new("X");
/// assert_eq!(x, Piece::new("X"));
/// assert!(!x.is_obstacle());
/// assert!(Piece::obstacle().is_obstacle());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Piece(String);

impl Piece {
    /// Create a piece with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The shared obstacle sentinel.
    #[must_use]
    pub fn obstacle() -> Self {
        Self(OBSTACLE_LABEL.to_string())
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Check if this is the obstacle sentinel.
    #[must_use]
    pub fn is_obstacle(&self) -> bool {
        self.0 == OBSTACLE_LABEL
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
