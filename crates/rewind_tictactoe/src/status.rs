//! Status line derived from the active snapshot.

use super::game::GameState;
use super::rules;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line says about the active position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Status of the active snapshot of `game`.
    #[instrument(skip(game), fields(current_move = game.current_move()))]
    pub fn of(game: &GameState) -> Self {
        let active = game.active();
        if let Some(mark) = active.win_result().winner() {
            Status::Winner(mark)
        } else if rules::is_full(active.board()) {
            Status::Draw
        } else {
            Status::NextPlayer(game.next_player())
        }
    }

    /// True once no further move can be made from this position.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}
