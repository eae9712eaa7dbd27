//! Rewind: tic-tac-toe in the terminal with move history and time travel.
//!
//! The game rules and history live in [`rewind_tictactoe`]; this crate is
//! the presentation layer on top of it.
//!
//! # Architecture
//!
//! - **Config**: TOML preferences with command-line overrides
//! - **TUI**: ratatui screen with board, status and move list
//! - **Replay**: headless rendering of a move sequence

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Replay
pub use replay::{render_report, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, digit_position, draw, move_cursor, run_tui};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, Coordinate, GameState, JumpError, MoveEntry, MoveError, Player, Position, Snapshot,
    SortOrder, Square, Status, WinResult,
};
