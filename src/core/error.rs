//! Error types for configuration and rule violations.
//!
//! Every failure the engine can report is synchronous and typed. Callers
//! (the turn-loop controller) decide how to present them; the engine never
//! retries or recovers on its own.

use thiserror::Error;

use super::piece::Piece;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by board construction, move execution and turn handling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === Configuration ===
    /// Board dimension below the minimum of 5.
    #[error("dimension must be at least 5: {0}")]
    DimensionTooSmall(i32),

    /// Board dimension is even.
    #[error("dimension must be odd: {0}")]
    DimensionNotOdd(i32),

    /// More obstacles requested than there are cells to hold them.
    #[error("too many obstacles: {requested} requested, at most {available} fit")]
    TooManyObstacles { requested: i32, available: i32 },

    /// Negative obstacle count.
    #[error("obstacle count cannot be negative: {0}")]
    NegativeObstacles(i32),

    /// Player count outside the supported range.
    #[error("player count must be between {min} and {max}: {actual}")]
    PlayerCount { actual: usize, min: usize, max: usize },

    // === Illegal moves ===
    /// Executing a move whose origin cell holds no piece.
    #[error("position ({row},{col}) has no pieces")]
    NoPieceAtOrigin { row: i32, col: i32 },

    /// Writing to a cell outside the board.
    #[error("position ({row},{col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Requesting a random move on a board with no empty cells.
    #[error("the board is full, cannot make a random move")]
    BoardFull,

    /// The piece to move has no legal destination anywhere.
    #[error("no legal moves for piece '{0}'")]
    NoLegalMoves(Piece),

    // === Contract violations ===
    /// A piece that is not part of the player sequence.
    #[error("piece '{0}' is not one of the players")]
    UnknownPlayer(Piece),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::DimensionTooSmall(3).to_string(),
            "dimension must be at least 5: 3"
        );
        assert_eq!(
            GameError::NoPieceAtOrigin { row: 1, col: 2 }.to_string(),
            "position (1,2) has no pieces"
        );
        assert_eq!(
            GameError::UnknownPlayer(Piece::new("Z")).to_string(),
            "piece 'Z' is not one of the players"
        );
    }
}
