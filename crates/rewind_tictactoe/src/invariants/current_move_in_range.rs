//! Active index stays inside a non-empty history.

use super::Invariant;
use crate::GameState;

/// Invariant: the history is non-empty and the active index points into it.
pub struct CurrentMoveInRangeInvariant;

impl Invariant<GameState> for CurrentMoveInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history.is_empty() && game.current_move < game.history.len()
    }

    fn description() -> &'static str {
        "Current move indexes into a non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_new_game() {
        assert!(CurrentMoveInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_detects_dangling_index() {
        let mut game = GameState::new();
        game.current_move = 3;
        assert!(!CurrentMoveInRangeInvariant::holds(&game));
    }
}
