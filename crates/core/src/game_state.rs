//! Game state module - the turn-based state machine
//!
//! This module ties together the board, placement, spawner and scoring. One
//! call to [`GameState::apply_command`] is one turn: the command's transform
//! (if legal), one gravity step, and a lock with line clears and a fresh spawn
//! once the piece can no longer fall.

use std::fmt;

use log::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::placement::{
    can_move_down, can_move_left, can_move_right, can_rotate_ccw, can_rotate_cw, is_game_over,
    Piece,
};
use crate::scoring::{score_lock, Progress};
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::Command;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    /// A freshly spawned piece was blocked on the spawn row
    GameOver,
    /// The player asked to leave
    Quit,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Playing
    }
}

/// Why a command had no effect on the piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    CannotMoveLeft,
    CannotMoveRight,
    CannotRotateCw,
    CannotRotateCcw,
    InvalidCommand,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::CannotMoveLeft => "Cannot move left!",
            Rejection::CannotMoveRight => "Cannot move right!",
            Rejection::CannotRotateCw => "Cannot rotate clockwise!",
            Rejection::CannotRotateCcw => "Cannot rotate anti-clockwise!",
            Rejection::InvalidCommand => "That is not a valid move!",
        })
    }
}

/// A piece settling into the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockEvent {
    pub piece: Piece,
    pub rows_cleared: u32,
    pub points: u32,
    pub leveled_up: bool,
}

/// What happened during one turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOutcome {
    pub rejection: Option<Rejection>,
    /// Whether gravity moved the piece down a row
    pub fell: bool,
    pub lock: Option<LockEvent>,
    pub status: Status,
}

impl TurnOutcome {
    fn idle(status: Status) -> Self {
        Self {
            rejection: None,
            fell: false,
            lock: None,
            status,
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    progress: Progress,
    spawner: Spawner,
    status: Status,
    last_rejection: Option<Rejection>,
    turns: u32,
}

impl GameState {
    /// Create a new game and spawn its first piece
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = match config.seed {
            Some(seed) => Spawner::new(seed),
            None => Spawner::from_entropy(),
        };
        Ok(Self::with_spawner(Board::new(config.board_size), spawner))
    }

    /// Create a game on a prepared board
    pub fn with_spawner(board: Board, mut spawner: Spawner) -> Self {
        let active = spawner.next_piece(&board);
        let status = if is_game_over(&board, &active) {
            Status::GameOver
        } else {
            Status::Playing
        };
        info!(
            "new game: board {}x{}, seed {}",
            board.size(),
            board.size(),
            spawner.seed()
        );
        debug!("spawned {} at {:?}", active.kind.as_str(), active.pos);

        Self {
            board,
            active,
            progress: Progress::new(),
            spawner,
            status,
            last_rejection: None,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines_in_level(&self) -> u32 {
        self.progress.lines_in_level
    }

    /// Current fall interval in seconds
    pub fn fall_interval(&self) -> f64 {
        self.progress.fall_interval
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Rejection recorded by the most recent turn
    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    /// Copy of everything a renderer needs; the board excludes the active piece
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            piece: self.active,
            score: self.progress.score,
            level: self.progress.level,
            lines_in_level: self.progress.lines_in_level,
            total_lines: self.progress.total_lines,
            fall_interval: self.progress.fall_interval,
            rejection: self.last_rejection,
            status: self.status,
        }
    }

    /// Play one turn.
    ///
    /// `Quit` ends the session without touching the board. Once the session
    /// is over, further commands are ignored.
    pub fn apply_command(&mut self, command: Command) -> TurnOutcome {
        if command == Command::Quit {
            if !self.status.is_terminal() {
                self.status = Status::Quit;
                info!("player quit after {} turns", self.turns);
            }
            self.last_rejection = None;
            return TurnOutcome::idle(self.status);
        }
        if self.status.is_terminal() {
            return TurnOutcome::idle(self.status);
        }

        self.turns += 1;
        let rejection = self.apply_transform(command);
        self.last_rejection = rejection;

        // Gravity follows every command, rejected or not.
        let fell = can_move_down(&self.board, &self.active);
        if fell {
            self.active = self.active.moved_to(self.active.pos.down());
        }

        let lock = if can_move_down(&self.board, &self.active) {
            None
        } else {
            Some(self.lock_piece())
        };

        TurnOutcome {
            rejection,
            fell,
            lock,
            status: self.status,
        }
    }

    fn apply_transform(&mut self, command: Command) -> Option<Rejection> {
        let piece = self.active;
        let (legal, next, rejection) = match command {
            Command::MoveLeft => (
                can_move_left(&self.board, &piece),
                piece.moved_to(piece.pos.left()),
                Rejection::CannotMoveLeft,
            ),
            Command::MoveRight => (
                can_move_right(&self.board, &piece),
                piece.moved_to(piece.pos.right()),
                Rejection::CannotMoveRight,
            ),
            Command::RotateCw => (
                can_rotate_cw(&self.board, &piece),
                piece.with_shape(piece.shape.rotate_cw()),
                Rejection::CannotRotateCw,
            ),
            Command::RotateCcw => (
                can_rotate_ccw(&self.board, &piece),
                piece.with_shape(piece.shape.rotate_ccw()),
                Rejection::CannotRotateCcw,
            ),
            Command::NoMove | Command::Quit => return None,
            Command::Unrecognized => return Some(Rejection::InvalidCommand),
        };

        if legal {
            self.active = next;
            None
        } else {
            debug!("rejected {}: {}", command.as_str(), rejection);
            Some(rejection)
        }
    }

    /// Merge the active piece, score the clears and spawn the next piece
    fn lock_piece(&mut self) -> LockEvent {
        let piece = self.active;
        let rows_cleared = self.board.merge_and_compact(&piece.shape, piece.pos) as u32;

        let result = score_lock(&self.progress, rows_cleared);
        self.progress = result.progress;
        debug!(
            "locked {} at {:?}, cleared {} rows, score {}",
            piece.kind.as_str(),
            piece.pos,
            rows_cleared,
            self.progress.score
        );
        if result.leveled_up {
            info!(
                "level up: level {}, fall interval {:.3}s",
                self.progress.level, self.progress.fall_interval
            );
        }

        self.active = self.spawner.next_piece(&self.board);
        debug!("spawned {} at {:?}", self.active.kind.as_str(), self.active.pos);
        if is_game_over(&self.board, &self.active) {
            self.status = Status::GameOver;
            info!(
                "game over: score {}, level {}, {} lines",
                self.progress.score, self.progress.level, self.progress.total_lines
            );
        }

        LockEvent {
            piece,
            rows_cleared,
            points: result.points,
            leveled_up: result.leveled_up,
        }
    }
}
