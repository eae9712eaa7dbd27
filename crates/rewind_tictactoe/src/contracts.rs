//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target square is empty on the active board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if `pos` is taken.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.active().board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Precondition: nobody has won on the active board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] if the active board has a winner.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match game.winner().winner() {
            Some(mark) => Err(MoveError::GameOver(mark)),
            None => Ok(()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Square must be empty
/// - Active board has no winner
///
/// Postconditions:
/// - History grew by exactly one past the previously active snapshot
/// - The new snapshot is active
/// - All history invariants hold
pub struct ApplyMoveContract;

impl Contract<GameState, Position> for ApplyMoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        CellIsEmpty::check(*pos, game)?;
        NoWinnerYet::check(game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history length {} (expected {})",
                after.history().len(),
                expected_len
            )));
        }
        if after.current_move() != after.latest_move() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: new snapshot is not active".to_string(),
            ));
        }
        if after.history()[..expected_len - 1] != before.history()[..expected_len - 1] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots changed".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;
    use crate::types::{Board, Player};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(ApplyMoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::replay(&[Position::Center]).unwrap();
        assert_eq!(
            ApplyMoveContract::pre(&game, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ])
        .unwrap();
        assert_eq!(
            ApplyMoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(Position::Center);
        assert!(ApplyMoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(Position::Center);

        // Two marks appear in one step.
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        after.history[1] = Snapshot::from_parts(board, Some(Position::Center));

        assert!(ApplyMoveContract::post(&before, &after).is_err());
    }
}
