//! Key mapping from typed lines to game commands.

use crate::types::Command;

/// Move piece left
pub const MOVE_LEFT: char = 'a';
/// Move piece right
pub const MOVE_RIGHT: char = 'd';
/// Rotate piece anticlockwise
pub const ROTATE_ANTICLOCKWISE: char = 'w';
/// Rotate piece clockwise
pub const ROTATE_CLOCKWISE: char = 's';
/// Let the piece fall as is
pub const NO_MOVE: char = 'e';
/// Leave the game
pub const QUIT_GAME: char = 'q';

/// Help lines for the key vocabulary, in display order.
pub const INSTRUCTIONS: [(char, &str); 6] = [
    (MOVE_LEFT, "move piece left"),
    (MOVE_RIGHT, "move piece right"),
    (ROTATE_ANTICLOCKWISE, "rotate piece counter clockwise"),
    (ROTATE_CLOCKWISE, "rotate piece clockwise"),
    (NO_MOVE, "just move the piece downwards as is"),
    (QUIT_GAME, "to quit the game anytime"),
];

/// Map one typed line to a command.
///
/// Surrounding whitespace is ignored and keys are case-insensitive. Anything
/// that is not exactly one known key is [`Command::Unrecognized`].
pub fn parse_line(line: &str) -> Command {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => map_key(key),
        _ => Command::Unrecognized,
    }
}

/// Map a single key to a command.
pub fn map_key(key: char) -> Command {
    match key.to_ascii_lowercase() {
        MOVE_LEFT => Command::MoveLeft,
        MOVE_RIGHT => Command::MoveRight,
        ROTATE_ANTICLOCKWISE => Command::RotateCcw,
        ROTATE_CLOCKWISE => Command::RotateCw,
        NO_MOVE => Command::NoMove,
        QUIT_GAME => Command::Quit,
        _ => Command::Unrecognized,
    }
}
