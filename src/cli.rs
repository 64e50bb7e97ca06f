//! Command-line configuration.
//!
//! Every flag can also come from the environment (`BLOCKS_*`), which is
//! handy when launching from a script or a terminal profile.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::Parser;

use crate::core::GameConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_MS, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

/// Falling-block puzzle in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "tui-blocks", version)]
#[command(about = "Falling-block puzzle in the terminal", long_about = None)]
pub struct Args {
    /// Board width in columns
    #[arg(long, env = "BLOCKS_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: usize,

    /// Board height in rows
    #[arg(long, env = "BLOCKS_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: usize,

    /// Milliseconds between automatic one-row drops
    #[arg(long, env = "BLOCKS_GRAVITY_MS", default_value_t = GRAVITY_MS)]
    pub gravity_ms: u32,

    /// Seed for the shape sequence (defaults to the clock)
    #[arg(long, env = "BLOCKS_SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, env = "BLOCKS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validate the flags and build the session configuration.
    pub fn game_config(&self) -> Result<GameConfig> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            ensure!(
                (MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&side),
                "board {name} must be between {MIN_BOARD_SIDE} and {MAX_BOARD_SIDE}, got {side}"
            );
        }
        ensure!(self.gravity_ms > 0, "gravity interval must be positive");

        Ok(GameConfig {
            width: self.width,
            height: self.height,
            gravity_ms: self.gravity_ms,
            seed: self.seed.unwrap_or_else(clock_seed),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn explicit_seed_is_kept() {
        let args = Args::try_parse_from(["tui-blocks", "--seed", "42"]).unwrap();
        assert_eq!(args.game_config().unwrap().seed, 42);
    }
}
