//! Game state with branching history.
//!
//! The history is a list of snapshots, index 0 being the empty board. The
//! active snapshot is chosen by `current_move`; seeking never rewrites the
//! history, but a move made from an earlier position discards everything
//! after it before appending.

use super::action::{JumpError, MoveError};
use super::contracts::{ApplyMoveContract, Contract};
use super::move_list::MoveEntry;
use super::position::Position;
use super::rules::WinResult;
use super::snapshot::Snapshot;
use super::sort::SortOrder;
use super::status::Status;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: history, active position and move-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_move: usize,
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game with only the empty starting snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::start()],
            current_move: 0,
            sort_order,
        }
    }

    /// Replays `moves` from the start, failing on the first illegal one.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.try_apply_move(*pos)?;
        }
        Ok(game)
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the newest snapshot.
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The snapshot being viewed.
    pub fn active(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// Whose turn it is at the active snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move_number(self.current_move)
    }

    /// Win evaluation of the active snapshot.
    pub fn winner(&self) -> WinResult {
        self.active().win_result()
    }

    /// Status line for the active snapshot.
    pub fn status(&self) -> Status {
        Status::of(self)
    }

    /// Places the next mark at `pos`, reporting why a move was refused.
    ///
    /// On success returns the new active index. Any snapshots after the
    /// previously active one are discarded first. On error the state is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOccupied`] if `pos` is taken on the active board.
    /// - [`MoveError::GameOver`] if the active board already has a winner.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn try_apply_move(&mut self, pos: Position) -> Result<usize, MoveError> {
        ApplyMoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let next = self.active().advance(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            if let Err(e) = ApplyMoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        debug!(%player, position = %pos, current_move = self.current_move, "Move applied");
        Ok(self.current_move)
    }

    /// Places the next mark at `pos`. Refused moves are ignored.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(e) = self.try_apply_move(pos) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`try_apply_move`](Self::try_apply_move), for a raw cell index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index outside 0-8, otherwise as
    /// `try_apply_move`.
    #[instrument(skip(self))]
    pub fn try_apply_move_index(&mut self, index: usize) -> Result<usize, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_apply_move(pos)
    }

    /// Places the next mark at cell `index` (0-8). Refused moves are ignored.
    #[instrument(skip(self))]
    pub fn apply_move_index(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move_index(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Makes snapshot `move_index` the active one. History is not changed.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `move_index` is not in the history; the
    /// active snapshot stays where it was.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                index: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_index, "Jumping");
        self.current_move = move_index;
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Label for history entry `index`, or `None` if there is no such entry.
    ///
    /// - start: `Go to game start`
    /// - latest: `You are at move #3 (1, 2)`
    /// - otherwise: `Go to move #2 (3, 1)`
    pub fn describe_move(&self, index: usize) -> Option<String> {
        let snapshot = self.history.get(index)?;
        let description = match snapshot.coordinate() {
            None => "Go to game start".to_string(),
            Some(coordinate) if index == self.latest_move() => {
                format!("You are at move #{index} {coordinate}")
            }
            Some(coordinate) => format!("Go to move #{index} {coordinate}"),
        };
        Some(description)
    }

    /// Move list in presentation order.
    #[instrument(skip(self), fields(sort_order = %self.sort_order))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let latest = self.latest_move();
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .filter_map(|index| {
                self.describe_move(index).map(|description| MoveEntry {
                    index,
                    description,
                    jumpable: index != latest,
                })
            })
            .collect();
        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
