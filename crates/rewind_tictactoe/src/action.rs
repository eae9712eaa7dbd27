//! Errors raised by game commands.
//!
//! The command surface of [`GameState`](crate::GameState) swallows these;
//! the `try_` variants return them for callers that want the reason.

use super::{Player, Position};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The active board already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when seeking through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The index is not inside the current history.
    #[display("Move #{index} is outside history of length {len}")]
    OutOfRange {
        /// Requested history index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
