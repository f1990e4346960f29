//! # ataxx-engine
//!
//! Rules engine for an Ataxx-style territory game played on an odd square
//! board with optional obstacle cells and 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Stateless Rules**: Rules objects keep nothing between calls. The
//!    board belongs to the caller and is passed in every time.
//!
//! 2. **Injected Capabilities**: Randomness (`RandomSource`) and move
//!    construction (`MoveFactory`) are handed in, so tests and variant
//!    games can substitute their own.
//!
//! 3. **Typed Errors**: Every failure is a `GameError` returned to the
//!    caller. Unparseable move text is `None`, not an error.
//!
//! ## Modules
//!
//! - `core`: Pieces, board, errors, RNG, configuration
//! - `rules`: `GameRules` / `GameMove` / `MoveFactory` traits
//! - `games`: The Ataxx rules, move type and game factory
//! - `players`: Move sources (uniform random)
//!
//! ## Example
//!
//! ```
//! use ataxx_engine::{AtaxxFactory, GameRules, Player};
//!
//! let factory = AtaxxFactory::default();
//! let rules = factory.rules();
//! let (mut board, pieces) = factory.setup().unwrap();
//!
//! let turn = rules.initial_player(&board, &pieces).unwrap();
//! let mut player = factory.random_player(0);
//! let mv = player.request_move(&turn, &board, &pieces, rules).unwrap();
//!
//! let (outcome, next) = rules.apply_move(&mut board, &pieces, &mv).unwrap();
//! assert!(!outcome.is_terminal());
//! assert_eq!(next.unwrap().label(), "O");
//! ```

pub mod core;
pub mod games;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AtaxxConfig, Board, Coord, GameError, GameRng, GameRngState, Piece, RandomSource, Result,
};

pub use crate::rules::{GameMove, GameOutcome, GameRules, GameStatus, MoveFactory, Players};

pub use crate::games::ataxx::{AtaxxFactory, AtaxxMove, AtaxxMoveFactory, AtaxxRules};

pub use crate::players::{Player, RandomPlayer};
