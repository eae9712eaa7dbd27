//! Win detection for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, checked in this order.
///
/// Rows first, then columns, then diagonals. When one move completes two
/// lines at once, the earlier line is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete.
    NoWinner,
    /// `mark` owns all three squares of `line`.
    Winner {
        /// The winning player.
        mark: Player,
        /// The completed line.
        line: [Position; 3],
    },
}

impl WinResult {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { mark, .. } => Some(*mark),
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { line, .. } => Some(*line),
        }
    }

    /// True if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }

    /// True if a winner was found.
    pub fn is_win(&self) -> bool {
        matches!(self, WinResult::Winner { .. })
    }
}

/// Evaluates `board` for a completed line.
///
/// Returns the first line in [`LINES`] whose three squares hold the same
/// mark.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult::Winner { mark, line };
        }
    }

    WinResult::NoWinner
}
