//! Move list entries for the history panel.

use serde::{Deserialize, Serialize};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this row refers to.
    pub index: usize,
    /// Human-readable label, see [`GameState::describe_move`](crate::GameState::describe_move).
    pub description: String,
    /// False for the latest entry, which is shown as the current position
    /// rather than as a jump target.
    pub jumpable: bool,
}
