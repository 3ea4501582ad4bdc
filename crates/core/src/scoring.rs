//! Scoring module - line clears to score, level and fall speed
//!
//! Rules:
//! - Each cleared row is worth `SCORE_PER_LINE`.
//! - After `LINES_PER_LEVEL` rows within a level, the level rises by one, the
//!   fall interval shrinks by `FALL_INTERVAL_MULTIPLIER`, the per-level row
//!   count resets and `LEVEL_UP_BONUS` is added.
//! - The level-up check runs once per lock, however many rows were cleared.

use crate::types::{
    FALL_INTERVAL_MULTIPLIER, INITIAL_FALL_INTERVAL_SECS, LEVEL_UP_BONUS, LINES_PER_LEVEL,
    SCORE_PER_LINE, STARTING_LEVEL,
};

/// Score and speed progression of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    /// Rows cleared since the last level-up
    pub lines_in_level: u32,
    /// Advisory delay between turns, in seconds
    pub fall_interval: f64,
    /// Rows cleared over the whole session
    pub total_lines: u32,
    pub pieces_locked: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines_in_level: 0,
            fall_interval: INITIAL_FALL_INTERVAL_SECS,
            total_lines: 0,
            pieces_locked: 0,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of scoring a single lock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockScore {
    pub progress: Progress,
    /// Points added by this lock, level-up bonus included
    pub points: u32,
    pub leveled_up: bool,
}

/// Points for clearing `rows` rows, before any bonus
pub fn line_clear_points(rows: u32) -> u32 {
    rows.saturating_mul(SCORE_PER_LINE)
}

/// Apply one lock event that cleared `cleared_rows` rows.
pub fn score_lock(progress: &Progress, cleared_rows: u32) -> LockScore {
    let mut next = *progress;
    let mut points = line_clear_points(cleared_rows);

    next.lines_in_level += cleared_rows;
    next.total_lines += cleared_rows;
    next.pieces_locked += 1;

    let leveled_up = next.lines_in_level >= LINES_PER_LEVEL;
    if leveled_up {
        next.level += 1;
        next.fall_interval *= FALL_INTERVAL_MULTIPLIER;
        next.lines_in_level = 0;
        points += LEVEL_UP_BONUS;
    }

    next.score = next.score.saturating_add(points);

    LockScore {
        progress: next,
        points,
        leveled_up,
    }
}
