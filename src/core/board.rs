//! Finite rectangular board of optional pieces.
//!
//! ## Coordinates
//!
//! Rows and columns are signed so that callers can compute neighbouring
//! cells (`row - 2`, `col + 2`, ...) without underflow and ask the board
//! whether they exist. Reads outside the board see an empty cell; writes
//! outside the board are an error.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::piece::Piece;

/// A `(row, col)` cell coordinate.
pub type Coord = (i32, i32);

/// A `rows × cols` grid where each cell is empty or holds a piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Create an empty square board.
    #[must_use]
    pub fn square(dim: usize) -> Self {
        Self::new(dim, dim)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if `(row, col)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Get the piece at `(row, col)`.
    ///
    /// Returns `None` for empty cells and for coordinates off the board.
    /// Use [`Board::contains`] to tell the two apart.
    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> Option<&Piece> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Check if `(row, col)` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        matches!(self.index(row, col), Some(i) if self.cells[i].is_none())
    }

    /// Place a piece at `(row, col)`, replacing whatever was there.
    pub fn set(&mut self, row: i32, col: i32, piece: Piece) -> Result<()> {
        let i = self
            .index(row, col)
            .ok_or(GameError::OutOfBounds { row, col })?;
        self.cells[i] = Some(piece);
        Ok(())
    }

    /// Check if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Number of cells holding `piece`.
    #[must_use]
    pub fn count(&self, piece: &Piece) -> usize {
        self.cells
            .iter()
            .filter(|c| c.as_ref() == Some(piece))
            .count()
    }

    /// Number of cells held by each piece present on the board.
    #[must_use]
    pub fn piece_counts(&self) -> FxHashMap<Piece, usize> {
        let mut counts = FxHashMap::default();
        for piece in self.cells.iter().flatten() {
            *counts.entry(piece.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, &Piece)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|piece| ((i / cols) as i32, (i % cols) as i32, piece))
        })
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_ref().map_or(".", Piece::label))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
