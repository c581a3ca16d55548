//! Noughts - terminal tic-tac-toe
//!
//! Play a friend on one keyboard or take on the computer, which either
//! plays at random or searches the whole game tree.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod selfplay;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use config::AppConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let file_config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            let config = file_config.with_overrides(&args);
            init_file_tracing(config.log_file())?;
            tui::run_tui(config).await
        }
        Command::Selfplay { games, x, o, seed } => {
            init_stderr_tracing();
            let seed = seed.or(*file_config.seed());
            let tally = selfplay::run_selfplay(games, x, o, seed)?;
            println!("{}", selfplay::summary(x, o, &tally));
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    info!(log_file = %path.display(), "File tracing initialized");
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
