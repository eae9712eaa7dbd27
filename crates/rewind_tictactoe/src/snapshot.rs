//! One immutable board state in the game history.

use super::position::{Coordinate, Position};
use super::rules::{self, WinResult};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A board together with the move that produced it.
///
/// The initial snapshot has no move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self::default()
    }

    /// The snapshot reached by `player` marking `pos` on this one.
    pub(crate) fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// Builds a snapshot from parts. Intended for tests and tooling that
    /// needs histories the game itself would never produce.
    pub fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell marked to produce this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Row and column of the move that produced this snapshot.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.last_move.map(Position::coordinate)
    }

    /// Win evaluation of this snapshot's board.
    pub fn win_result(&self) -> WinResult {
        rules::evaluate(&self.board)
    }
}
