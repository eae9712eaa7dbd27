//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, Position, SortOrder};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    MoveList,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        let mut app = Self {
            game: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::MoveList => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::MoveList => self.move_selection(key),
            },
            _ => {}
        }
    }

    /// Places the next mark at `pos`. Refused moves change nothing.
    ///
    /// Once the active position is won or drawn the board stops taking
    /// input; the move list still works.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        let status = self.game.status();
        if status.is_over() {
            debug!(%status, "Board input ignored");
            return;
        }
        self.game.apply_move(pos);
        self.select_current();
    }

    /// Jumps to the history entry under the selection.
    ///
    /// The latest entry is shown as the current position, not as a jump
    /// target, so selecting it does nothing.
    #[instrument(skip(self), fields(selected = self.selected))]
    pub fn jump_to_selected(&mut self) {
        let entries = self.game.move_list();
        let Some(entry) = entries.get(self.selected) else {
            return;
        };
        if !entry.jumpable {
            debug!(index = entry.index, "Entry is not a jump target");
            return;
        }
        if let Err(e) = self.game.jump_to(entry.index) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Flips the move-list order, keeping the same entry selected.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        let last_row = self.game.latest_move();
        self.game.toggle_sort_order();
        self.selected = last_row - self.selected.min(last_row);
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last_row = self.game.latest_move();
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last_row),
            _ => self.selected,
        };
    }

    /// Points the selection at the active history entry.
    fn select_current(&mut self) {
        let current = self.game.current_move();
        self.selected = match self.game.sort_order() {
            SortOrder::Ascending => current,
            SortOrder::Descending => self.game.latest_move() - current,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_places_mark_and_moves_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_toggle_sort_keeps_entry_selected() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('9'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), 2);

        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.game().move_list()[app.selected()].index, 2);
    }

    #[test]
    fn test_board_ignores_input_after_win() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        let before = app.game().clone();

        app.handle_key(KeyCode::Char('9'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game(), &before);
        assert_eq!(app.selected(), 5);

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().current_move(), 4);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
