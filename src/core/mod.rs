//! Core engine types: pieces, board, errors, RNG, configuration.
//!
//! These building blocks are game-agnostic. The Ataxx rules in
//! `games::ataxx` are written against them.

pub mod board;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;

pub use board::{Board, Coord};
pub use config::{AtaxxConfig, DEFAULT_DIM, MIN_DIM};
pub use error::{GameError, Result};
pub use piece::{Piece, OBSTACLE_LABEL};
pub use rng::{GameRng, GameRngState, RandomSource};
