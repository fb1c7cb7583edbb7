//! Terminal Bagels runner (default binary).
//!
//! Reads settings from the environment, then plays rounds on stdin/stdout
//! until the player declines to replay.

use std::env;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::info;

use bagels::core::{GameConfig, GameState};
use bagels::term::{run, Console};

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env().context("failed to load game settings")?;
    let seed = config.seed().unwrap_or_else(clock_seed);
    info!(
        "starting with {} digits, {} guesses, seed {}",
        config.num_digits(),
        config.max_guesses(),
        seed
    );

    let color = env::var_os("NO_COLOR").is_none() && io::stdout().is_tty();
    let mut console = Console::stdio().with_color(color);
    let mut state = GameState::new(config, seed);

    run(&mut state, &mut console)
}

/// Seed from the wall clock when no fixed seed is configured.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
