//! Text-mode falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the workspace crates under `textris::{core,engine,input,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use textris_core as core;
pub use textris_engine as engine;
pub use textris_input as input;
pub use textris_term as term;
pub use textris_types as types;
