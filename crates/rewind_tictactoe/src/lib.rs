//! Tic-tac-toe with a branching move history.
//!
//! The crate holds the whole game-state engine and nothing else: no
//! rendering, no input handling. A front end reads the active
//! [`Snapshot`], the [`Status`] and the [`GameState::move_list`], and
//! drives the game with three commands:
//!
//! - [`GameState::apply_move`] places the next mark, discarding any
//!   snapshots after the active one
//! - [`GameState::jump_to`] makes an earlier snapshot active
//! - [`GameState::toggle_sort_order`] flips the move-list order
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position, Status};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), Status::NextPlayer(rewind_tictactoe::Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod snapshot;
mod sort;
mod status;
mod types;

pub use action::{JumpError, MoveError};
pub use game::GameState;
pub use move_list::MoveEntry;
pub use position::{Coordinate, Position};
pub use rules::WinResult;
pub use snapshot::Snapshot;
pub use sort::SortOrder;
pub use status::Status;
pub use types::{Board, Player, Square};
