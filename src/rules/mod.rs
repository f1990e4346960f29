//! Rules engine trait for game implementations.
//!
//! Games implement `GameRules` to define:
//! - Board setup
//! - Legal moves for the player to move
//! - Turn order
//! - Win/draw conditions
//!
//! Moves implement `GameMove`; how they are built (from coordinates or
//! from text) is the `MoveFactory` capability.

pub mod engine;
pub mod moves;

pub use engine::{player_pieces, GameOutcome, GameRules, GameStatus, Players};
pub use moves::{GameMove, MoveFactory};
