//! Property tests - board invariants under arbitrary play

use proptest::prelude::*;

use textris::core::placement::spawn;
use textris::core::{Board, GameConfig, GameState, Position, ShapeKind, Status};
use textris::types::{Cell, Command};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::RotateCw),
        Just(Command::RotateCcw),
        Just(Command::NoMove),
        Just(Command::Unrecognized),
    ]
}

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    (0..ShapeKind::ALL.len()).prop_map(|i| ShapeKind::ALL[i])
}

fn walls_intact(board: &Board) -> bool {
    let n = board.size() as i16;
    (0..n).all(|r| board.get(r, 0) == Some(Cell::Filled) && board.get(r, n - 1) == Some(Cell::Filled))
        && board.filled_in_row(board.size() - 1) == board.size()
}

proptest! {
    #[test]
    fn prop_walls_survive_any_command_sequence(
        seed in any::<u64>(),
        size in 6usize..16,
        commands in prop::collection::vec(command_strategy(), 0..300),
    ) {
        let config = GameConfig::default().with_board_size(size).with_seed(seed);
        let mut game = GameState::new(&config).unwrap();
        for command in commands {
            let outcome = game.apply_command(command);
            prop_assert!(walls_intact(game.board()));
            if outcome.status == Status::Playing && outcome.lock.is_none() {
                prop_assert!(game.active().fits(game.board()));
            }
        }
    }

    #[test]
    fn prop_score_tracks_cleared_rows(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..400),
    ) {
        let config = GameConfig::default().with_board_size(6).with_seed(seed);
        let mut game = GameState::new(&config).unwrap();
        let mut cleared = 0u32;
        let mut level_ups = 0u32;
        for command in commands {
            if let Some(lock) = game.apply_command(command).lock {
                cleared += lock.rows_cleared;
                level_ups += u32::from(lock.leveled_up);
            }
        }
        prop_assert_eq!(game.progress().total_lines, cleared);
        prop_assert_eq!(game.score(), cleared * 100 + level_ups * 500);
        prop_assert_eq!(game.level(), 1 + level_ups);
    }

    #[test]
    fn prop_compaction_conserves_cells(
        fill in prop::collection::vec(prop::collection::vec(any::<bool>(), 8), 9),
        kind in kind_strategy(),
        col in 1i16..6,
    ) {
        // 10x10 board: interior rows 0..9, columns 1..=8.
        let size = 10usize;
        let mut board = Board::new(size);
        for (r, row) in fill.iter().enumerate() {
            // Keep the top rows clear so the piece has room.
            if r < 4 {
                continue;
            }
            for (c, filled) in row.iter().enumerate() {
                if *filled {
                    board.set(r as i16, c as i16 + 1, Cell::Filled);
                }
            }
        }
        let shape = kind.shape();
        let pos = Position::new(0, col);
        prop_assume!(board.fits(&shape, pos) && col as usize + shape.cols() < size);

        let before = board.filled_count();
        let cleared = board.merge_and_compact(&shape, pos);
        let interior = size - 2;
        prop_assert_eq!(
            board.filled_count(),
            before + shape.cell_count() - cleared * interior
        );
        prop_assert!(walls_intact(&board));
        for row in 0..size - 1 {
            prop_assert!(!board.is_row_full(row));
        }
    }

    #[test]
    fn prop_spawn_fits_on_empty_board(seed in any::<u64>(), size in 6usize..64) {
        use rand::SeedableRng;
        let board = Board::new(size);
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let piece = spawn(&board, &mut rng);
        prop_assert_eq!(piece.pos.row, 0);
        prop_assert!(piece.pos.col >= 1);
        prop_assert!(piece.pos.col as usize + piece.shape.cols() <= size - 2);
        prop_assert!(piece.fits(&board));
    }
}
