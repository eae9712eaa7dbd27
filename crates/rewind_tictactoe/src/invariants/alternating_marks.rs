//! Alternating marks invariant: X, O, X, O, ... by history index.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: the mark placed to reach snapshot `i` belongs to the player
/// whose turn it was at snapshot `i - 1`.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().skip(1).all(|(i, snapshot)| {
            snapshot.last_move().is_some_and(|pos| {
                snapshot.board().get(pos) == Square::Occupied(Player::for_move_number(i - 1))
            })
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O starting with X"
    }
}
