//! Each snapshot adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{Board, GameState, Snapshot, Square};

/// Invariant: the history starts empty and every later snapshot differs from
/// the one before it in exactly one cell, which went from empty to occupied
/// and is recorded as that snapshot's move.
pub struct SingleCellTransitionInvariant;

impl SingleCellTransitionInvariant {
    fn is_single_mark(prev: &Snapshot, next: &Snapshot) -> bool {
        let Some(pos) = next.last_move() else {
            return false;
        };
        let changed = prev
            .board()
            .squares()
            .iter()
            .zip(next.board().squares())
            .filter(|(a, b)| a != b)
            .count();

        changed == 1
            && prev.board().get(pos) == Square::Empty
            && next.board().get(pos) != Square::Empty
    }
}

impl Invariant<GameState> for SingleCellTransitionInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(start) = history.first() else {
            return false;
        };
        if *start.board() != Board::new() || start.last_move().is_some() {
            return false;
        }

        history
            .windows(2)
            .all(|pair| Self::is_single_mark(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}
