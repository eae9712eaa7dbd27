//! Headless replay: play a move sequence and print what the screen would show.

use rewind_tictactoe::{GameState, JumpError, SortOrder};
use tracing::{debug, instrument};

/// Plays `cells` from the start, then optionally jumps to `jump`.
///
/// Cells the game refuses are skipped, exactly as a click on them would be.
///
/// # Errors
///
/// Returns [`JumpError`] if `jump` is outside the resulting history.
#[instrument]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    sort_order: SortOrder,
) -> Result<GameState, JumpError> {
    let mut game = GameState::with_sort_order(sort_order);
    for cell in cells {
        game.apply_move_index(*cell);
    }
    debug!(len = game.history().len(), "Moves replayed");

    if let Some(index) = jump {
        game.jump_to(index)?;
    }
    Ok(game)
}

/// Plain-text rendering of the board, status and move list.
pub fn render_report(game: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&game.active().board().display());
    out.push_str("\n\n");
    out.push_str(&format!("{}\n\n", game.status()));
    out.push_str(&format!("Moves ({}):\n", game.sort_order()));
    for entry in game.move_list() {
        let marker = if entry.index == game.current_move() {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{} {}. {}\n", marker, entry.index + 1, entry.description));
    }
    out
}
