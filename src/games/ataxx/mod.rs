//! Ataxx variant on an odd square board with optional obstacles.
//!
//! - 2-4 players, each starting with two pieces on the board edge
//! - A move names an origin holding the player's piece and an empty
//!   destination at most two cells away in each direction
//! - A player wins by filling a whole row, column or diagonal
//! - A full board with no complete line is a draw

mod factory;
mod moves;
mod rules;

pub use factory::AtaxxFactory;
pub use moves::{AtaxxMove, AtaxxMoveFactory};
pub use rules::{AtaxxRules, MOVE_RADIUS};
