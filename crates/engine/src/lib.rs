//! Session driver.
//!
//! Connects a [`GameState`] to its three collaborators: a [`CommandSource`]
//! that blocks until the player's next command, a [`RenderSink`] that shows
//! each turn, and a [`Pacer`] that waits out the fall interval between turns.
//! The driver owns the game state; nothing else mutates it.

use std::time::Duration;

use anyhow::Result;
use log::info;

use textris_core::{GameSnapshot, GameState, Status};
use textris_types::Command;

pub use textris_core as core;
pub use textris_types as types;

/// Receives one snapshot per turn.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Yields the player's next command.
///
/// Implementations report end of input as [`Command::Quit`].
pub trait CommandSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Advisory delay between turns.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }
}

impl<T: CommandSource + ?Sized> CommandSource for &mut T {
    fn next_command(&mut self) -> Result<Command> {
        (**self).next_command()
    }
}

impl<T: Pacer + ?Sized> Pacer for &mut T {
    fn pause(&mut self, interval: Duration) {
        (**self).pause(interval)
    }
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _interval: Duration) {}
}

/// Convert a fall interval in seconds to a sleep duration.
///
/// Non-finite or negative values map to zero.
pub fn fall_delay(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

/// A finished session, with the state it ended in
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEnd {
    /// `Quit` or `GameOver`
    pub status: Status,
    pub snapshot: GameSnapshot,
    pub turns: u32,
}

/// One game from first spawn to quit or game over
pub struct Session<S, R, P> {
    game: GameState,
    source: S,
    sink: R,
    pacer: P,
}

impl<S, R, P> Session<S, R, P>
where
    S: CommandSource,
    R: RenderSink,
    P: Pacer,
{
    pub fn new(game: GameState, source: S, sink: R, pacer: P) -> Self {
        Self {
            game,
            source,
            sink,
            pacer,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Play until the player quits or the game ends.
    ///
    /// The opening frame is rendered before the first command. A quit returns
    /// without rendering again; every other turn is rendered, then paced.
    pub fn run(mut self) -> Result<SessionEnd> {
        info!("session started (seed {})", self.game.seed());
        self.sink.render(&self.game.snapshot())?;

        while !self.game.status().is_terminal() {
            let command = self.source.next_command()?;
            let outcome = self.game.apply_command(command);
            if outcome.status == Status::Quit {
                break;
            }

            self.sink.render(&self.game.snapshot())?;
            if outcome.status.is_terminal() {
                break;
            }
            self.pacer.pause(fall_delay(self.game.fall_interval()));
        }

        let end = SessionEnd {
            status: self.game.status(),
            snapshot: self.game.snapshot(),
            turns: self.game.turns(),
        };
        info!(
            "session ended: {:?} after {} turns, score {}",
            end.status, end.turns, end.snapshot.score
        );
        Ok(end)
    }
}
