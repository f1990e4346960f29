//! Rules-level tests for the Ataxx engine through the public API.

use ataxx_engine::core::{AtaxxConfig, Board, GameError, GameRng, Piece};
use ataxx_engine::games::ataxx::{AtaxxFactory, AtaxxRules, MOVE_RADIUS};
use ataxx_engine::rules::{GameOutcome, GameRules, MoveFactory};
use proptest::prelude::*;

fn labels(labels: &[&str]) -> Vec<Piece> {
    labels.iter().map(|l| Piece::new(*l)).collect()
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_initial_placement_5x5() {
    let factory = AtaxxFactory::new(AtaxxConfig::new(5)).unwrap();
    let (board, pieces) = factory.setup().unwrap();

    assert_eq!(pieces, labels(&["X", "O"]));

    let x = Piece::new("X");
    let o = Piece::new("O");
    let expected = [((0, 0), &x), ((4, 4), &x), ((0, 4), &o), ((4, 0), &o)];
    for ((row, col), piece) in expected {
        assert_eq!(board.get(row, col), Some(piece));
    }

    let occupied: Vec<_> = board.occupied().collect();
    assert_eq!(occupied.len(), 4);
    assert_eq!(board.empty_count(), 21);
}

#[test]
fn test_extra_players_on_edges() {
    for dim in [5, 7, 9, 11] {
        let rules = AtaxxRules::new(&AtaxxConfig::new(dim)).unwrap();
        let mut rng = GameRng::new(0);
        let mid = dim / 2;

        let board = rules
            .create_board(&labels(&["X", "O", "Z", "W"]), &mut rng)
            .unwrap();

        assert_eq!(board.get(mid, 0), Some(&Piece::new("Z")));
        assert_eq!(board.get(mid, dim - 1), Some(&Piece::new("Z")));
        assert_eq!(board.get(0, mid), Some(&Piece::new("W")));
        assert_eq!(board.get(dim - 1, mid), Some(&Piece::new("W")));
    }
}

#[test]
fn test_game_over_full_board_without_line_is_draw() {
    let rules = AtaxxRules::new(&AtaxxConfig::new(5)).unwrap();
    let pieces = labels(&["X", "O", "Z"]);
    let mut board = Board::square(5);
    for row in 0..5 {
        for col in 0..5 {
            board
                .set(row, col, pieces[((row * row + col) % 3) as usize].clone())
                .unwrap();
        }
    }

    assert!(board.is_full());
    assert_eq!(
        rules.update_state(&board, &pieces, &pieces[0]),
        GameOutcome::Draw
    );
}

#[test]
fn test_executing_from_empty_origin_fails() {
    let factory = AtaxxFactory::default();
    let (mut board, pieces) = factory.setup().unwrap();
    let rules = factory.rules();

    let parsed = factory
        .move_factory()
        .parse_move(&pieces[0], "3 3 4 4")
        .unwrap();
    let err = rules.apply_move(&mut board, &pieces, &parsed).unwrap_err();

    assert_eq!(err, GameError::NoPieceAtOrigin { row: 3, col: 3 });
}

#[test]
fn test_turn_rotation_skips_obstacle_piece() {
    let factory = AtaxxFactory::new(AtaxxConfig::new(5).with_obstacles(3)).unwrap();
    let (board, pieces) = factory.setup().unwrap();
    let rules = factory.rules();

    let x = rules.initial_player(&board, &pieces).unwrap();
    let o = rules.next_player(&board, &pieces, &x).unwrap();
    let back = rules.next_player(&board, &pieces, &o).unwrap();

    assert_eq!(x, Piece::new("X"));
    assert_eq!(o, Piece::new("O"));
    assert_eq!(back, x);
    assert!(rules
        .next_player(&board, &pieces, &Piece::obstacle())
        .is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_config_validation(dim in -3i32..30, obstacles in -5i32..1000) {
        let valid = dim >= 5 && dim % 2 == 1 && (0..=dim * dim).contains(&obstacles);
        let config = AtaxxConfig::new(dim).with_obstacles(obstacles);

        prop_assert_eq!(config.validate().is_ok(), valid);
        prop_assert_eq!(AtaxxFactory::new(config).is_ok(), valid);
    }

    #[test]
    fn prop_obstacle_count(half in 2i32..8, fill in 0.0f64..1.0, players in 2usize..=4, seed: u64) {
        let dim = half * 2 + 1;
        let free = dim * dim - 2 * players as i32;
        let obstacles = (f64::from(free) * fill) as i32;
        let rules = AtaxxRules::new(&AtaxxConfig::new(dim).with_obstacles(obstacles)).unwrap();
        let pieces = labels(&["X", "O", "Z", "W"][..players]);

        let board = rules.create_board(&pieces, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.count(&Piece::obstacle()) as i32, obstacles);
        for piece in &pieces {
            prop_assert_eq!(board.count(piece), 2);
        }
    }

    #[test]
    fn prop_valid_moves_are_bounded(half in 2i32..6, obstacles in 0i32..20, seed: u64) {
        let dim = half * 2 + 1;
        let factory = AtaxxFactory::new(
            AtaxxConfig::new(dim).with_obstacles(obstacles).with_seed(seed),
        ).unwrap();
        let (board, pieces) = factory.setup().unwrap();
        let turn = Piece::new("X");

        let moves = factory.rules().valid_moves(&board, &pieces, &turn);

        for mv in &moves {
            let (orow, ocol) = mv.origin();
            let (drow, dcol) = mv.dest();
            prop_assert_eq!(board.get(orow, ocol), Some(&turn));
            prop_assert!((drow - orow).abs() <= MOVE_RADIUS);
            prop_assert!((dcol - ocol).abs() <= MOVE_RADIUS);
            prop_assert!(board.is_empty_at(drow, dcol));
        }
    }
}
