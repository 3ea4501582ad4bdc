//! Placement tests - spawn bounds and the game-over rule

use rand::rngs::StdRng;
use rand::SeedableRng;
use textris::core::placement::{can_move_down, is_game_over, spawn, spawn_columns, Piece};
use textris::core::{Board, Position, ShapeKind, Spawner};
use textris::types::Cell;

#[test]
fn test_spawn_stays_inside_walls_across_sizes() {
    for size in [6usize, 7, 10, 22, 40] {
        let board = Board::new(size);
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..50 {
                let piece = spawn(&board, &mut rng);
                let right = piece.pos.col as usize + piece.shape.cols();
                assert_eq!(piece.pos.row, 0);
                assert!(piece.pos.col >= 1, "size {size}: {piece:?}");
                assert!(right <= size - 2, "size {size}: {piece:?}");
            }
        }
    }
}

#[test]
fn test_spawn_column_range_matches_width() {
    assert_eq!(spawn_columns(22, 4), 1..17);
    assert_eq!(spawn_columns(10, 1), 1..8);
}

#[test]
fn test_same_seed_same_pieces() {
    let board = Board::new(22);
    let mut a = Spawner::new(2024);
    let mut b = Spawner::new(2024);
    for _ in 0..100 {
        assert_eq!(a.next_piece(&board), b.next_piece(&board));
    }
}

#[test]
fn test_fresh_board_is_not_game_over() {
    let board = Board::new(22);
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, Position::new(0, 5));
        assert!(can_move_down(&board, &piece));
        assert!(!is_game_over(&board, &piece));
    }
}

#[test]
fn test_stack_under_spawn_row_is_game_over() {
    let mut board = Board::new(22);
    // A column of settled cells reaching up to row 2.
    for row in 2..21 {
        board.set(row, 5, Cell::Filled);
    }
    let square = Piece::new(ShapeKind::Square, Position::new(0, 5));
    assert!(is_game_over(&board, &square));

    // The same piece one column over still falls.
    let beside = square.moved_to(Position::new(0, 7));
    assert!(!is_game_over(&board, &beside));
}

#[test]
fn test_landing_below_spawn_row_is_not_game_over() {
    let board = Board::new(22);
    let landed = Piece::new(ShapeKind::Bar, Position::new(17, 3));
    assert!(!can_move_down(&board, &landed));
    assert!(!is_game_over(&board, &landed));
}
