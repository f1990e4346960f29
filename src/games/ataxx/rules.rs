//! Ataxx rules: board setup, move generation, turn order and line detection.

use tracing::{debug, instrument, trace};

use crate::core::{AtaxxConfig, Board, Coord, GameError, Piece, RandomSource, Result, DEFAULT_DIM};
use crate::rules::{player_pieces, GameOutcome, GameRules, MoveFactory};

use super::moves::AtaxxMoveFactory;

/// Reach of a move in each direction: destinations lie in the 5×5 window
/// centred on the origin.
pub const MOVE_RADIUS: i32 = 2;

/// Rules for an Ataxx game on an odd `dim × dim` board.
///
/// Stateless between calls: the board is passed in every time. The move
/// factory decides the concrete move type returned by `valid_moves`.
#[derive(Clone, Debug)]
pub struct AtaxxRules<F = AtaxxMoveFactory> {
    dim: i32,
    obstacles: i32,
    factory: F,
}

impl Default for AtaxxRules {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            obstacles: 0,
            factory: AtaxxMoveFactory,
        }
    }
}

impl AtaxxRules {
    /// Create rules from a configuration.
    pub fn new(config: &AtaxxConfig) -> Result<Self> {
        Self::with_factory(config, AtaxxMoveFactory)
    }
}

impl<F: MoveFactory> AtaxxRules<F> {
    /// Create rules that build moves with `factory`.
    pub fn with_factory(config: &AtaxxConfig, factory: F) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dim: config.dim,
            obstacles: config.obstacles,
            factory,
        })
    }

    /// Board side length.
    #[must_use]
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// Obstacle cells placed at setup.
    #[must_use]
    pub fn obstacles(&self) -> i32 {
        self.obstacles
    }

    /// The move factory.
    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Starting cells for each player index.
    fn starting_cells(&self, player_count: usize) -> Vec<(usize, Coord)> {
        let last = self.dim - 1;
        let mid = self.dim / 2;

        let mut cells = vec![
            (0, (0, 0)),
            (0, (last, last)),
            (1, (0, last)),
            (1, (last, 0)),
        ];
        if player_count >= 3 {
            cells.push((2, (mid, 0)));
            cells.push((2, (mid, last)));
        }
        if player_count >= 4 {
            cells.push((3, (0, mid)));
            cells.push((3, (last, mid)));
        }
        cells
    }

    fn place_obstacles(&self, board: &mut Board, rng: &mut dyn RandomSource) -> Result<()> {
        let available = board.empty_count() as i32;
        if self.obstacles > available {
            return Err(GameError::TooManyObstacles {
                requested: self.obstacles,
                available,
            });
        }

        let bound = self.dim as usize;
        let obstacle = Piece::obstacle();
        let mut placed = 0;
        while placed < self.obstacles {
            let row = rng.gen_index(bound) as i32;
            let col = rng.gen_index(bound) as i32;
            if board.is_empty_at(row, col) {
                board.set(row, col, obstacle.clone())?;
                placed += 1;
            }
        }
        Ok(())
    }

    /// The piece filling every cell of `line`, if there is one.
    fn line_owner<'a>(board: &'a Board, mut line: impl Iterator<Item = Coord>) -> Option<&'a Piece> {
        let (row, col) = line.next()?;
        let first = board.get(row, col)?;
        line.all(|(r, c)| board.get(r, c) == Some(first))
            .then_some(first)
    }

    /// First complete line on the board.
    ///
    /// Scan order: row `i` then column `i` for `i` ascending, then the main
    /// diagonal, then the anti-diagonal from the bottom-left corner. Line
    /// lengths come from `board`, not from the configured dimension.
    fn find_complete_line<'a>(&self, board: &'a Board) -> Option<&'a Piece> {
        let (rows, cols) = (board.rows() as i32, board.cols() as i32);
        for i in 0..rows.max(cols) {
            if i < rows {
                if let Some(piece) = Self::line_owner(board, (0..cols).map(move |j| (i, j))) {
                    return Some(piece);
                }
            }
            if i < cols {
                if let Some(piece) = Self::line_owner(board, (0..rows).map(move |j| (j, i))) {
                    return Some(piece);
                }
            }
        }
        let n = rows.min(cols);
        Self::line_owner(board, (0..n).map(|j| (j, j)))
            .or_else(|| Self::line_owner(board, (0..n).map(move |j| (n - 1 - j, j))))
    }
}

impl<F: MoveFactory> GameRules for AtaxxRules<F> {
    type Move = F::Move;

    fn game_description(&self) -> String {
        if self.obstacles == 0 {
            format!("Ataxx {0}x{0}", self.dim)
        } else {
            format!("Ataxx {0}x{0} with {1} obstacles", self.dim, self.obstacles)
        }
    }

    #[instrument(level = "debug", skip_all, fields(dim = self.dim, obstacles = self.obstacles))]
    fn create_board(&self, pieces: &[Piece], rng: &mut dyn RandomSource) -> Result<Board> {
        let players = self.check_player_count(pieces)?;

        let mut board = Board::square(self.dim as usize);
        for (index, (row, col)) in self.starting_cells(players.len()) {
            board.set(row, col, players[index].clone())?;
        }
        self.place_obstacles(&mut board, rng)?;

        debug!(players = players.len(), "created board");
        Ok(board)
    }

    fn initial_player(&self, _board: &Board, pieces: &[Piece]) -> Result<Piece> {
        let players = self.check_player_count(pieces)?;
        Ok(players[0].clone())
    }

    fn min_players(&self) -> usize {
        2
    }

    fn max_players(&self) -> usize {
        4
    }

    fn update_state(&self, board: &Board, _pieces: &[Piece], _last_player: &Piece) -> GameOutcome {
        let outcome = match self.find_complete_line(board) {
            Some(piece) => GameOutcome::Won(piece.clone()),
            None if board.is_full() => GameOutcome::Draw,
            None => GameOutcome::InPlay,
        };
        if outcome.is_terminal() {
            debug!(?outcome, counts = ?board.piece_counts(), "game over");
        }
        outcome
    }

    fn next_player(&self, _board: &Board, pieces: &[Piece], last_player: &Piece) -> Result<Piece> {
        let players = player_pieces(pieces);
        let i = players
            .iter()
            .position(|p| p == last_player)
            .ok_or_else(|| GameError::UnknownPlayer(last_player.clone()))?;
        Ok(players[(i + 1) % players.len()].clone())
    }

    fn valid_moves(&self, board: &Board, _pieces: &[Piece], turn: &Piece) -> Vec<Self::Move> {
        let mut moves = Vec::new();

        for (row, col, piece) in board.occupied() {
            if piece != turn {
                continue;
            }
            let before = moves.len();
            for dr in -MOVE_RADIUS..=MOVE_RADIUS {
                for dc in -MOVE_RADIUS..=MOVE_RADIUS {
                    let dest = (row + dr, col + dc);
                    // Off-board destinations are skipped, not treated as empty
                    if board.is_empty_at(dest.0, dest.1) {
                        moves.push(self.factory.make_move((row, col), dest, turn.clone()));
                    }
                }
            }
            trace!(row, col, count = moves.len() - before, "moves from origin");
        }

        moves
    }

    fn evaluate(&self, _board: &Board, _pieces: &[Piece], _turn: &Piece) -> f64 {
        0.0
    }
}
