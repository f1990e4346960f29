//! Rules engine trait for game implementations.
//!
//! Games implement `GameRules` to define their rules:
//! - How the board is set up
//! - What moves are legal
//! - Whose turn is next
//! - Win/draw conditions
//!
//! Rules objects hold no per-game state. The board is owned by the caller
//! and passed in on every call.

use smallvec::SmallVec;

use crate::core::{Board, GameError, Piece, RandomSource, Result};

use super::moves::GameMove;

/// Ordered sequence of player pieces (2-4 in practice).
pub type Players = SmallVec<[Piece; 4]>;

/// Status part of a [`GameOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The game continues.
    InPlay,
    /// A single piece has won.
    Won,
    /// The game ended without a winner.
    Draw,
}

/// Result of evaluating the board after a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// No terminal condition reached.
    InPlay,
    /// Single winner.
    Won(Piece),
    /// Draw (no winner).
    Draw,
}

impl GameOutcome {
    /// The status without the winning piece.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self {
            GameOutcome::InPlay => GameStatus::InPlay,
            GameOutcome::Won(_) => GameStatus::Won,
            GameOutcome::Draw => GameStatus::Draw,
        }
    }

    /// The winning piece, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Piece> {
        match self {
            GameOutcome::Won(piece) => Some(piece),
            _ => None,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InPlay)
    }
}

/// The player pieces in `pieces`, in order, without the obstacle sentinel.
///
/// Piece lists handed out by a game factory may include the obstacle piece;
/// it never takes a turn.
#[must_use]
pub fn player_pieces(pieces: &[Piece]) -> Players {
    pieces.iter().filter(|p| !p.is_obstacle()).cloned().collect()
}

/// Rules engine trait.
///
/// The controller drives a game through these calls:
/// `valid_moves` (optional) → player picks a move → `GameMove::execute` →
/// `update_state` → `next_player` → repeat.
pub trait GameRules {
    /// Move type produced by `valid_moves`.
    type Move: GameMove;

    /// Human-readable game name and size.
    fn game_description(&self) -> String;

    /// Create and populate the starting board.
    fn create_board(&self, pieces: &[Piece], rng: &mut dyn RandomSource) -> Result<Board>;

    /// The piece that moves first.
    fn initial_player(&self, board: &Board, pieces: &[Piece]) -> Result<Piece>;

    /// Minimum number of players.
    fn min_players(&self) -> usize;

    /// Maximum number of players.
    fn max_players(&self) -> usize;

    /// Evaluate the board after `last_player` moved.
    fn update_state(&self, board: &Board, pieces: &[Piece], last_player: &Piece) -> GameOutcome;

    /// The piece that moves after `last_player`.
    fn next_player(&self, board: &Board, pieces: &[Piece], last_player: &Piece) -> Result<Piece>;

    /// All legal moves for `turn`.
    fn valid_moves(&self, board: &Board, pieces: &[Piece], turn: &Piece) -> Vec<Self::Move>;

    /// Heuristic value of the board for `turn`.
    fn evaluate(&self, board: &Board, pieces: &[Piece], turn: &Piece) -> f64;

    // === Convenience Methods ===

    /// Check that `pieces` holds an allowed number of players.
    fn check_player_count(&self, pieces: &[Piece]) -> Result<Players> {
        let players = player_pieces(pieces);
        if (self.min_players()..=self.max_players()).contains(&players.len()) {
            Ok(players)
        } else {
            Err(GameError::PlayerCount {
                actual: players.len(),
                min: self.min_players(),
                max: self.max_players(),
            })
        }
    }

    /// Execute `mv`, then report the outcome and who moves next.
    ///
    /// The next player is `None` once the game is over.
    fn apply_move(
        &self,
        board: &mut Board,
        pieces: &[Piece],
        mv: &Self::Move,
    ) -> Result<(GameOutcome, Option<Piece>)> {
        mv.execute(board)?;
        let outcome = self.update_state(board, pieces, mv.piece());
        if outcome.is_terminal() {
            return Ok((outcome, None));
        }
        let next = self.next_player(board, pieces, mv.piece())?;
        Ok((outcome, Some(next)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let won = GameOutcome::Won(Piece::new("X"));
        assert_eq!(won.status(), GameStatus::Won);
        assert_eq!(won.winner(), Some(&Piece::new("X")));
        assert!(won.is_terminal());

        assert_eq!(GameOutcome::Draw.status(), GameStatus::Draw);
        assert!(GameOutcome::Draw.winner().is_none());
        assert!(GameOutcome::Draw.is_terminal());

        assert_eq!(GameOutcome::InPlay.status(), GameStatus::InPlay);
        assert!(!GameOutcome::InPlay.is_terminal());
    }

    #[test]
    fn test_player_pieces_drops_obstacle() {
        let pieces = [Piece::new("X"), Piece::new("O"), Piece::obstacle()];
        let players = player_pieces(&pieces);
        assert_eq!(players.as_slice(), &[Piece::new("X"), Piece::new("O")]);
    }
}
