//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind::{DEFAULT_CONFIG_PATH, SortOrder};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Initial move-list order (ascending or descending)
    #[arg(long, global = true)]
    pub sort: Option<SortOrder>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (default)
    Play {
        /// Log file, overriding the config
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a sequence of cells (0-8) and print the resulting screen
    Replay {
        /// Cell indices in play order
        cells: Vec<usize>,

        /// History index to view after playing
        #[arg(long)]
        jump: Option<usize>,
    },
}
