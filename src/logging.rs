//! `tracing` subscriber setup for the command-line front end.
//!
//! Verbosity maps to a level filter (`0 = warn`, `1 = info`, `2 = debug`,
//! `3+ = trace`); `quiet` silences everything. Events go to stderr and,
//! optionally, without ANSI colours to a log file.
use std::fs::File;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Level filter for a verbosity count.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).compact();
    let subscriber = tracing_subscriber::registry().with(level_for(verbosity, quiet)).with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
        let file_layer = fmt::layer().with_writer(file).with_ansi(false).with_target(true);
        subscriber.with(file_layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }
    Ok(())
}
