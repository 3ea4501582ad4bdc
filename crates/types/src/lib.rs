//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! The board is square and includes its walls:
//!
//! - **Side**: [`BOARD_SIZE`] cells (22 by default, so the playable interior is 20x20)
//! - **Walls**: column 0, column `size - 1` and row `size - 1` are always filled
//! - **Top**: row 0 has no wall sentinel; pieces spawn there
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_LINE` | 100 | Points per cleared row |
//! | `LINES_PER_LEVEL` | 10 | Rows needed to advance a level |
//! | `LEVEL_UP_BONUS` | 500 | Points awarded on level-up |
//!
//! # Pacing
//!
//! The fall interval starts at [`INITIAL_FALL_INTERVAL_SECS`] and is multiplied
//! by [`FALL_INTERVAL_MULTIPLIER`] on every level-up. There is no floor.
//!
//! # Examples
//!
//! ```
//! use textris_types::{Command, BOARD_SIZE};
//!
//! assert_eq!(Command::RotateCw.as_str(), "rotateCw");
//! assert_eq!(BOARD_SIZE, 22);
//! ```

/// Default board side length in cells, walls included (20 playable + 2 walls)
pub const BOARD_SIZE: usize = 22;

/// Smallest accepted board side (4x4 interior fits every catalog shape in any rotation)
pub const MIN_BOARD_SIZE: usize = 6;

/// Largest accepted board side
pub const MAX_BOARD_SIZE: usize = 64;

/// Points per cleared row
pub const SCORE_PER_LINE: u32 = 100;

/// Rows that must be cleared within a level to advance
pub const LINES_PER_LEVEL: u32 = 10;

/// Bonus points awarded when the level rises
pub const LEVEL_UP_BONUS: u32 = 500;

/// Level a new game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Fall interval at the first level, in seconds
pub const INITIAL_FALL_INTERVAL_SECS: f64 = 1.0;

/// Factor applied to the fall interval on each level-up
pub const FALL_INTERVAL_MULTIPLIER: f64 = 0.9;

/// Largest row or column count of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;


/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    /// OR-merge of two cells
    pub fn or(self, other: Cell) -> Cell {
        if self.is_filled() || other.is_filled() {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }
}

/// Player commands accepted by the game, one per turn
///
/// Every command except [`Command::Quit`] is followed by a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Apply no transform, just let the piece fall
    NoMove,
    /// End the session immediately
    Quit,
    /// Input that maps to no command; the piece still falls
    Unrecognized,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::NoMove,
        Command::Quit,
        Command::Unrecognized,
    ];

    /// camelCase name, used in log records
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::NoMove => "noMove",
            Command::Quit => "quit",
            Command::Unrecognized => "unrecognized",
        }
    }
}
