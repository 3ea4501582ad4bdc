//! Line-based command input.
//!
//! One command per line of text, the way a plain terminal in cooked mode
//! delivers it. [`LineInput`] wraps any [`BufRead`] and implements the
//! engine's [`CommandSource`].

pub mod map;

use std::io::{self, BufRead, StdinLock};

use anyhow::{Context, Result};

use textris_engine::CommandSource;

pub use textris_types as types;

pub use map::{map_key, parse_line, INSTRUCTIONS};

use crate::types::Command;

/// Reads commands from lines of text.
pub struct LineInput<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(16),
        }
    }

    /// Read the next line; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily, so such a line
    /// maps to [`Command::Unrecognized`] instead of failing the read.
    pub fn read_command(&mut self) -> io::Result<Option<Command>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(parse_line(&String::from_utf8_lossy(&self.line))))
    }
}

impl LineInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CommandSource for LineInput<R> {
    fn next_command(&mut self) -> Result<Command> {
        let command = self
            .read_command()
            .context("failed to read the next move")?;
        Ok(command.unwrap_or(Command::Quit))
    }
}
