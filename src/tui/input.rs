//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Coord;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells in row-major order, as on the printed board.
pub fn digit_to_coord(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coord::from_index)
}
