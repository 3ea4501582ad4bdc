//! GameView: maps a [`GameSnapshot`] into a text framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use textris_input::INSTRUCTIONS;

use crate::core::{GameSnapshot, Status};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const TITLE: &str = "Text mode version of the TETRIS game";
pub const PROMPT: &str = "Your move:";
pub const GAME_OVER: &str = "GAME OVER";

const BLOCK: char = '*';

/// A rendered frame and where the cursor should rest afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub fb: FrameBuffer,
    pub cursor: (u16, u16),
}

/// Text layout of a turn: title, board, score line, help, message, prompt.
pub struct GameView {
    wall: CellStyle,
    settled: CellStyle,
    active: CellStyle,
    text: CellStyle,
    message: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            wall: CellStyle {
                fg: Rgb::new(120, 120, 130),
                bold: false,
                dim: true,
            },
            settled: CellStyle::fg(Rgb::new(220, 220, 220)),
            active: CellStyle {
                fg: Rgb::new(0, 220, 220),
                bold: true,
                dim: false,
            },
            text: CellStyle::default(),
            message: CellStyle {
                fg: Rgb::new(230, 80, 80),
                bold: true,
                dim: false,
            },
        }
    }
}

impl GameView {
    /// Text lines below the board, in order, with their style.
    fn footer(&self, snap: &GameSnapshot) -> Vec<(String, CellStyle)> {
        let mut lines = vec![
            (String::new(), self.text),
            (
                format!("Score: {}  |  Level: {}", snap.score, snap.level),
                self.text,
            ),
            (String::new(), self.text),
            ("Quick play instructions:".to_string(), self.text),
            (String::new(), self.text),
        ];
        lines.extend(
            INSTRUCTIONS
                .iter()
                .map(|(key, help)| (format!(" - {key} (return): {help}"), self.text)),
        );
        lines.push((String::new(), self.text));
        if let Some(rejection) = snap.rejection {
            lines.push((rejection.to_string(), self.message));
        }
        let last = if snap.status == Status::GameOver {
            (GAME_OVER.to_string(), self.message)
        } else {
            (format!("{PROMPT} "), self.text)
        };
        lines.push(last);
        lines
    }

    pub fn render(&self, snap: &GameSnapshot) -> Frame {
        let composite = snap.composited();
        let size = snap.board.size();
        let footer = self.footer(snap);

        // Title, two blank lines, the board, then the footer.
        let board_top = 3u16;
        let footer_top = board_top + size as u16;
        let width = footer
            .iter()
            .map(|(line, _)| line.chars().count())
            .chain([TITLE.len(), size])
            .max()
            .unwrap_or(size) as u16;
        let height = footer_top + footer.len() as u16;

        let mut fb = FrameBuffer::new(width, height);
        fb.put_str(0, 0, TITLE, self.text);

        for (row, cells) in composite.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if !cell.is_filled() {
                    continue;
                }
                let (r, c) = (row as i16, col as i16);
                let style = if snap.board.is_wall(r, c) {
                    self.wall
                } else if snap.board.get(r, c).is_some_and(|settled| settled.is_filled()) {
                    self.settled
                } else {
                    self.active
                };
                fb.put_char(col as u16, board_top + row as u16, BLOCK, style);
            }
        }

        for (i, (line, style)) in footer.iter().enumerate() {
            fb.put_str(0, footer_top + i as u16, line, *style);
        }

        let last = footer.last().map_or(0, |(line, _)| line.chars().count()) as u16;
        Frame {
            fb,
            cursor: (last, height - 1),
        }
    }
}
