//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use oxo_engine::CellId;

/// Moves the cursor one cell for arrow keys (or `hjkl`).
///
/// The cursor stops at the board edge; other keys leave it where it is.
pub fn move_cursor(cursor: CellId, key: KeyCode) -> CellId {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, column + 1)),
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, column)),
        _ => None,
    };

    target
        .and_then(|(row, column)| CellId::at(row, column))
        .unwrap_or(cursor)
}

/// The cell a digit key taps directly, if any.
pub fn digit_cell(key: KeyCode) -> Option<CellId> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| i32::try_from(d).ok())
            .and_then(|d| CellId::new(d).ok()),
        _ => None,
    }
}
