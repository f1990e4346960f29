//! Ataxx move type and its factory.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Coord, GameError, Piece, Result};
use crate::rules::{GameMove, MoveFactory};

/// A move from an origin cell to a destination cell.
///
/// Only the origin is written on execution: the moving player's piece is
/// stamped onto the (occupied) origin cell and the destination is left
/// untouched. No piece is cloned or jumped and no neighbours are captured.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtaxxMove {
    origin: Coord,
    dest: Coord,
    piece: Piece,
}

impl AtaxxMove {
    /// Create a move.
    #[must_use]
    pub fn new(origin: Coord, dest: Coord, piece: Piece) -> Self {
        Self {
            origin,
            dest,
            piece,
        }
    }

    /// Origin cell.
    #[must_use]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Destination cell.
    #[must_use]
    pub fn dest(&self) -> Coord {
        self.dest
    }
}

impl GameMove for AtaxxMove {
    fn piece(&self) -> &Piece {
        &self.piece
    }

    fn execute(&self, board: &mut Board) -> Result<()> {
        let (row, col) = self.origin;
        if board.get(row, col).is_none() {
            return Err(GameError::NoPieceAtOrigin { row, col });
        }
        board.set(row, col, self.piece.clone())?;
        debug!(piece = %self.piece, origin = ?self.origin, dest = ?self.dest, "executed move");
        Ok(())
    }
}

impl std::fmt::Display for AtaxxMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Place a piece '{}' at ({},{})",
            self.piece, self.origin.0, self.origin.1
        )
    }
}

/// Builds [`AtaxxMove`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AtaxxMoveFactory;

impl MoveFactory for AtaxxMoveFactory {
    type Move = AtaxxMove;

    fn make_move(&self, origin: Coord, dest: Coord, piece: Piece) -> AtaxxMove {
        AtaxxMove::new(origin, dest, piece)
    }
}
