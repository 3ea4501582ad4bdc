//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminal, input or timing, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is reachable from plain function calls
//! - **Synchronous**: one call is one turn, with no notion of wall-clock time
//!
//! # Module Structure
//!
//! - [`shape`]: the five-shape catalog and matrix rotation
//! - [`board`]: walled square grid with overlap checks, merging and row clears
//! - [`placement`]: spawning and move/rotate legality
//! - [`spawner`]: seeded random piece source
//! - [`scoring`]: score, level and fall interval progression
//! - [`game_state`]: the turn state machine
//! - [`snapshot`]: owned copies of state for renderers
//! - [`config`]: per-session settings
//!
//! # Game Rules
//!
//! - Each turn applies at most one move or rotation, then one gravity step.
//! - Rotation happens in place; there are no wall kicks.
//! - A piece that cannot fall locks immediately; full rows are cleared.
//! - The game ends when a newly spawned piece cannot fall from row 0.
//!
//! # Example
//!
//! ```
//! use textris_core::{GameConfig, GameState, Status};
//! use textris_types::Command;
//!
//! let mut game = GameState::new(&GameConfig::default().with_seed(12345)).unwrap();
//!
//! let outcome = game.apply_command(Command::NoMove);
//! assert!(outcome.fell);
//! assert_eq!(game.active().pos.row, 1);
//!
//! game.apply_command(Command::Quit);
//! assert_eq!(game.status(), Status::Quit);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod placement;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod spawner;

pub use textris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Position};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent, Rejection, Status, TurnOutcome};
pub use placement::Piece;
pub use scoring::{score_lock, LockScore, Progress};
pub use shape::{Shape, ShapeKind};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
