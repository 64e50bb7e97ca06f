//! Logger setup.
//!
//! The game owns the terminal's alternate screen, so log lines cannot go to
//! stderr. Logging is off unless a log file is given; then `env_logger`
//! writes there, filtered by `RUST_LOG` (default `info`).

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install the global logger writing to `path`, or do nothing if `None`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    Ok(())
}
