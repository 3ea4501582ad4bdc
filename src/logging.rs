//! File logger behind the `log` facade.
//!
//! The screen belongs to the game, so log records only go to a file. The
//! level comes from the `TEXTRIS_LOG` environment variable (default `info`).

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub const LOG_LEVEL_ENV: &str = "TEXTRIS_LOG";

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Append log records to `path` at the level named by `TEXTRIS_LOG`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let level = level_from(env::var(LOG_LEVEL_ENV).ok().as_deref());

    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .map(|()| log::set_max_level(level))
    .context("a logger is already installed")?;
    Ok(())
}
