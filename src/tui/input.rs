//! Keyboard navigation helpers.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges. Other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keypad digits `1`-`9` to board positions.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Position::from_index(digit as usize - 1),
        _ => None,
    }
}
