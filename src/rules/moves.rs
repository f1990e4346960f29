//! Move behavior and move construction.
//!
//! A move knows how to apply itself to a board. How moves are built is a
//! separate capability, `MoveFactory`, handed to both the text-parsing path
//! and the move generator. A variant game supplies its own factory (and
//! move type) instead of subclassing.

use std::fmt::Debug;

use crate::core::{Board, Coord, Piece, Result};

/// A move that can be executed against a board.
pub trait GameMove: Clone + Debug {
    /// The piece of the player making the move.
    fn piece(&self) -> &Piece;

    /// Apply the move to the board in place.
    ///
    /// Fails without touching the board if the move is illegal.
    fn execute(&self, board: &mut Board) -> Result<()>;
}

/// Builds moves from coordinates or from text.
pub trait MoveFactory {
    /// The move type produced.
    type Move: GameMove;

    /// Build a move from `origin` to `dest` for `piece`.
    fn make_move(&self, origin: Coord, dest: Coord, piece: Piece) -> Self::Move;

    /// Describe the accepted text format.
    fn help(&self) -> String {
        "'originRow originCol destRow destCol', to move a piece".to_string()
    }

    /// Parse `"originRow originCol destRow destCol"` into a move.
    ///
    /// Returns `None` unless the text is exactly four whitespace-separated
    /// integers. Callers re-prompt on `None`.
    ///
    /// ```
    /// use ataxx_engine::core::Piece;
    /// use ataxx_engine::games::ataxx::AtaxxMoveFactory;
    /// use ataxx_engine::rules::MoveFactory;
    ///
    /// let factory = AtaxxMoveFactory;
    /// let m = factory.parse_move(&Piece::new("X"), "0 0 1 1").unwrap();
    /// assert_eq!(m.origin(), (0, 0));
    /// assert!(factory.parse_move(&Piece::new("X"), "a b 1").is_none());
    /// ```
    fn parse_move(&self, piece: &Piece, text: &str) -> Option<Self::Move> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let [origin_row, origin_col, dest_row, dest_col] = words.as_slice() else {
            return None;
        };

        let origin = (origin_row.parse().ok()?, origin_col.parse().ok()?);
        let dest = (dest_row.parse().ok()?, dest_col.parse().ok()?);
        Some(self.make_move(origin, dest, piece.clone()))
    }
}
