//! Text-mode Tetris runner (default binary).
//!
//! One command per line on stdin, a full redraw per turn on stdout, and a
//! pause of the current fall interval between turns.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use textris::core::{GameConfig, GameState, Status};
use textris::engine::{NoPacer, Pacer, Session, SessionEnd, ThreadPacer};
use textris::input::LineInput;
use textris::logging::init_file_logging;
use textris::term::TerminalRenderer;
use textris::types::BOARD_SIZE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length in cells, walls included
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Skip the pause between turns
    #[arg(long)]
    no_delay: bool,

    /// Append log records to this file (level from TEXTRIS_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = GameConfig {
        board_size: cli.size,
        seed: cli.seed,
    };
    let game = GameState::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = if cli.no_delay {
        run(game, &mut term, NoPacer)
    } else {
        run(game, &mut term, ThreadPacer)
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    let end = result?;
    println!("{}", farewell(&end));
    log::logger().flush();
    Ok(())
}

fn run<P: Pacer>(game: GameState, term: &mut TerminalRenderer, pacer: P) -> Result<SessionEnd> {
    Session::new(game, LineInput::stdin(), term, pacer).run()
}

/// Line printed after the last frame.
///
/// The final frame already shows GAME OVER, so only the summary follows it.
/// `Session::run` returns on a terminal status only; `Playing` is grouped
/// with `Quit` to keep the match total.
fn farewell(end: &SessionEnd) -> String {
    match end.status {
        Status::GameOver => format!(
            "Score: {}  |  Level: {}  |  Lines: {}",
            end.snapshot.score, end.snapshot.level, end.snapshot.total_lines
        ),
        Status::Quit | Status::Playing => "Bye. Thank you for playing!".to_string(),
    }
}
