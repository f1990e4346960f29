//! Wiring for an Ataxx game from a single configuration.

use crate::core::{AtaxxConfig, Board, GameRng, Piece, Result};
use crate::players::RandomPlayer;
use crate::rules::GameRules;

use super::moves::AtaxxMoveFactory;
use super::rules::AtaxxRules;

/// Builds the rules, pieces, board and random players for one
/// configuration.
///
/// ```
/// use ataxx_engine::core::AtaxxConfig;
/// use ataxx_engine::games::ataxx::AtaxxFactory;
///
/// let factory = AtaxxFactory::new(AtaxxConfig::new(5).with_obstacles(2)).unwrap();
/// let (board, pieces) = factory.setup().unwrap();
///
/// assert_eq!(pieces.len(), 3); // X, O and the obstacle piece
/// assert_eq!(board.empty_count(), 25 - 4 - 2);
/// ```
#[derive(Clone, Debug)]
pub struct AtaxxFactory {
    config: AtaxxConfig,
    rules: AtaxxRules,
    rng: GameRng,
}

impl Default for AtaxxFactory {
    fn default() -> Self {
        let config = AtaxxConfig::default();
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rules: AtaxxRules::default(),
            rng,
        }
    }
}

impl AtaxxFactory {
    /// Validate `config` and build a factory for it.
    pub fn new(config: AtaxxConfig) -> Result<Self> {
        let rules = AtaxxRules::new(&config)?;
        let rng = GameRng::new(config.seed);
        Ok(Self { config, rules, rng })
    }

    /// The configuration this factory was built from.
    #[must_use]
    pub fn config(&self) -> &AtaxxConfig {
        &self.config
    }

    /// The game rules.
    #[must_use]
    pub fn rules(&self) -> &AtaxxRules {
        &self.rules
    }

    /// The factory used to parse moves typed by a human player.
    #[must_use]
    pub fn move_factory(&self) -> AtaxxMoveFactory {
        *self.rules.factory()
    }

    /// Default pieces: `X` and `O`, plus the obstacle piece when the
    /// configuration places obstacles.
    #[must_use]
    pub fn default_pieces(&self) -> Vec<Piece> {
        let mut pieces = vec![Piece::new("X"), Piece::new("O")];
        if self.config.obstacles > 0 {
            pieces.push(Piece::obstacle());
        }
        pieces
    }

    /// RNG stream used for obstacle placement.
    #[must_use]
    pub fn board_rng(&self) -> GameRng {
        self.rng.for_context("obstacles")
    }

    /// A random player with its own RNG stream.
    ///
    /// Players built from the same factory with different `index` values
    /// draw independent sequences.
    #[must_use]
    pub fn random_player(&self, index: usize) -> RandomPlayer {
        RandomPlayer::new(self.rng.for_context(&format!("random-player-{index}")))
    }

    /// Create the starting board for `pieces`.
    pub fn create_board(&self, pieces: &[Piece]) -> Result<Board> {
        self.rules.create_board(pieces, &mut self.board_rng())
    }

    /// Create the starting board with the default pieces.
    pub fn setup(&self) -> Result<(Board, Vec<Piece>)> {
        let pieces = self.default_pieces();
        let board = self.create_board(&pieces)?;
        Ok((board, pieces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;
    use crate::rules::MoveFactory;

    #[test]
    fn test_default_factory() {
        let factory = AtaxxFactory::default();
        assert_eq!(factory.config().dim, 7);
        assert_eq!(factory.rules().game_description(), "Ataxx 7x7");
        assert_eq!(
            factory.default_pieces(),
            vec![Piece::new("X"), Piece::new("O")]
        );
    }

    #[test]
    fn test_new_validates() {
        let err = AtaxxFactory::new(AtaxxConfig::new(6)).unwrap_err();
        assert_eq!(err, GameError::DimensionNotOdd(6));
    }

    #[test]
    fn test_obstacle_piece_in_defaults() {
        let factory = AtaxxFactory::new(AtaxxConfig::new(5).with_obstacles(1)).unwrap();
        let pieces = factory.default_pieces();
        assert_eq!(pieces.len(), 3);
        assert!(pieces[2].is_obstacle());
    }

    #[test]
    fn test_setup_is_deterministic_per_seed() {
        let config = AtaxxConfig::new(9).with_obstacles(10).with_seed(7);
        let (a, _) = AtaxxFactory::new(config.clone()).unwrap().setup().unwrap();
        let (b, _) = AtaxxFactory::new(config).unwrap().setup().unwrap();

        assert_eq!(a, b);
        assert_eq!(a.count(&Piece::obstacle()), 10);
    }

    #[test]
    fn test_move_factory_parses() {
        let factory = AtaxxFactory::default();
        let mv = factory
            .move_factory()
            .parse_move(&Piece::new("O"), "1 2 3 4")
            .unwrap();
        assert_eq!(mv.origin(), (1, 2));
        assert_eq!(mv.dest(), (3, 4));
    }

    #[test]
    fn test_random_player_streams_per_index() {
        use crate::players::Player;

        let factory = AtaxxFactory::default();
        let (board, pieces) = factory.setup().unwrap();
        let x = Piece::new("X");
        let draw = |index| {
            let mut player = factory.random_player(index);
            (0..20)
                .map(|_| player.request_move(&x, &board, &pieces, factory.rules()).unwrap())
                .collect::<Vec<_>>()
        };

        let first = draw(0);
        assert_eq!(first, draw(0));
        assert_ne!(first, draw(1));
    }
}
