//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{Config, render_report, replay, run_tui};
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => run_play(config.with_overrides(cli.sort, log_file)),
        Command::Replay { cells, jump } => {
            run_replay(config.with_overrides(cli.sort, None), cells, jump)
        }
    }
}

/// Filter from `RUST_LOG`, falling back to the configured directive.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so output doesn't fight the screen.
fn run_play(config: Config) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Logging initialized");
    run_tui(&config)
}

/// Replay cells headlessly and print the report to stdout.
fn run_replay(config: Config, cells: Vec<usize>, jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    print_replay(&config, &cells, jump)
}

#[instrument(skip(config))]
fn print_replay(config: &Config, cells: &[usize], jump: Option<usize>) -> Result<()> {
    let game = replay(cells, jump, *config.sort_order()).context("Replay failed")?;
    print!("{}", render_report(&game));
    Ok(())
}
