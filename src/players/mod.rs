//! Move sources.
//!
//! A player is asked for a move on its turn. Human and delayed-AI players
//! live with the controller; the engine ships the uniform-random player.

mod random;

pub use random::RandomPlayer;

use crate::core::{Board, Piece, Result};
use crate::rules::GameRules;

/// Something that chooses a move for `piece`.
pub trait Player<R: GameRules> {
    /// Choose a move for `piece` on `board`.
    fn request_move(
        &mut self,
        piece: &Piece,
        board: &Board,
        pieces: &[Piece],
        rules: &R,
    ) -> Result<R::Move>;
}
