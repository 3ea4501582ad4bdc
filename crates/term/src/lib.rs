//! Text-mode game renderer.
//!
//! Renders a turn into a simple framebuffer, the way the game is shown in a
//! plain terminal: the board drawn in `*`, score and level, help text, the
//! last rejection message and a prompt. The framebuffer is flushed with
//! crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the layout pure (`game_view`) and the I/O thin (`renderer`)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use textris_core as core;
pub use textris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Frame, GameView, GAME_OVER, PROMPT, TITLE};
pub use renderer::{encode_full_into, TerminalRenderer};
