//! Uniform-random move selection.

use tracing::debug;

use crate::core::{Board, GameError, GameRng, Piece, RandomSource, Result};
use crate::rules::GameRules;

use super::Player;

/// Picks one legal move uniformly at random.
///
/// One draw per request, no retries. The randomness source is injected so
/// tests can script it.
#[derive(Clone, Debug)]
pub struct RandomPlayer<S = GameRng> {
    rng: S,
}

impl RandomPlayer {
    /// Create a random player seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<S: RandomSource> RandomPlayer<S> {
    /// Create a random player drawing from `rng`.
    pub fn new(rng: S) -> Self {
        Self { rng }
    }
}

impl<R: GameRules, S: RandomSource> Player<R> for RandomPlayer<S> {
    fn request_move(
        &mut self,
        piece: &Piece,
        board: &Board,
        pieces: &[Piece],
        rules: &R,
    ) -> Result<R::Move> {
        if board.is_full() {
            return Err(GameError::BoardFull);
        }

        let mut moves = rules.valid_moves(board, pieces, piece);
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves(piece.clone()));
        }

        let index = self.rng.gen_index(moves.len());
        debug!(%piece, index, of = moves.len(), "random move");
        Ok(moves.swap_remove(index))
    }
}
