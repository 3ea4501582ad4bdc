//! Game configuration and its validation.

use std::fmt;

use crate::types::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length, walls included
    pub board_size: usize,
    /// Seed for the spawner; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall(usize),
    BoardTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall(size) => write!(
                f,
                "board size {size} is too small (minimum {MIN_BOARD_SIZE}, walls included)"
            ),
            ConfigError::BoardTooLarge(size) => {
                write!(f, "board size {size} is too large (maximum {MAX_BOARD_SIZE})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
