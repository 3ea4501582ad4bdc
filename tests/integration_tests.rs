//! Integration tests - a whole session through line input and the renderer

use std::io::Cursor;

use textris::core::{Board, GameConfig, GameState, Spawner, Status};
use textris::engine::{NoPacer, Session};
use textris::input::LineInput;
use textris::term::{TerminalRenderer, GAME_OVER, TITLE};
use textris::types::Cell;

fn play(game: GameState, script: &str) -> (textris::engine::SessionEnd, String) {
    play_bytes(game, script.as_bytes())
}

fn play_bytes(game: GameState, script: &[u8]) -> (textris::engine::SessionEnd, String) {
    let input = LineInput::new(Cursor::new(script.to_vec()));
    let mut term = TerminalRenderer::with_writer(Vec::new());
    let end = Session::new(game, input, &mut term, NoPacer).run().unwrap();
    let text = String::from_utf8_lossy(term.writer()).into_owned();
    (end, text)
}

#[test]
fn test_scripted_session_until_quit() {
    let game = GameState::new(&GameConfig::default().with_seed(42)).unwrap();
    let (end, text) = play(game, "a\nd\nw\ns\nx\ne\nq\nd\n");

    assert_eq!(end.status, Status::Quit);
    assert_eq!(end.turns, 6);
    // Six gravity steps from the spawn row.
    assert_eq!(end.snapshot.piece.pos.row, 6);
    assert!(text.contains(TITLE));
    assert!(text.contains("Score: 0  |  Level: 1"));
    assert!(text.contains("That is not a valid move!"));
    assert!(text.contains(" - e (return): just move the piece downwards as is"));
    // Opening frame plus six turns.
    assert_eq!(text.matches(TITLE).count(), 7);
}

#[test]
fn test_non_utf8_line_is_rejected_not_fatal() {
    let game = GameState::new(&GameConfig::default().with_seed(42)).unwrap();
    let (end, text) = play_bytes(game, b"e\n\xff\ne\nq\n");

    assert_eq!(end.status, Status::Quit);
    assert_eq!(end.turns, 3);
    // The piece kept falling through the rejected line.
    assert_eq!(end.snapshot.piece.pos.row, 3);
    assert!(text.contains("That is not a valid move!"));
}

#[test]
fn test_end_of_input_is_quit() {
    let game = GameState::new(&GameConfig::default().with_seed(1)).unwrap();
    let (end, _) = play(game, "e\ne\n");

    assert_eq!(end.status, Status::Quit);
    assert_eq!(end.turns, 2);
}

#[test]
fn test_blocked_spawn_ends_before_first_move() {
    let mut board = Board::new(8);
    for col in 1..7 {
        board.set(1, col, Cell::Filled);
    }
    let game = GameState::with_spawner(board, Spawner::new(9));
    assert_eq!(game.status(), Status::GameOver);

    let (end, text) = play(game, "e\n");
    assert_eq!(end.status, Status::GameOver);
    assert_eq!(end.turns, 0);
    assert!(text.contains(GAME_OVER));
    assert!(!text.contains("Your move:"));
}

#[test]
fn test_long_session_keeps_walls_and_terminates() {
    let game = GameState::new(&GameConfig::default().with_board_size(8).with_seed(77)).unwrap();
    let script = "a\ne\nd\nw\ne\ns\n".repeat(200);
    let (end, _) = play(game, &script);

    assert!(end.status.is_terminal());
    let board = &end.snapshot.board;
    for row in 0..8i16 {
        assert_eq!(board.get(row, 0), Some(Cell::Filled));
        assert_eq!(board.get(row, 7), Some(Cell::Filled));
    }
    assert_eq!(board.filled_in_row(7), 8);
}
