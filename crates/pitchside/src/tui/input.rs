//! Mapping terminal input onto grid cells.

use crossterm::event::KeyCode;
use pitchside_wordsearch::Cell;
use ratatui::layout::Rect;

/// Terminal columns per grid cell (letter plus spacing).
pub const CELL_WIDTH: u16 = 2;

/// Moves the keyboard cursor, staying on a `size`×`size` grid.
pub fn move_cursor(cursor: Cell, key: KeyCode, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => Cell::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Cell::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Cell::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Cell::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}

/// The grid cell under terminal position `(column, row)`.
///
/// `board` is the area the letters are drawn in, top-left cell first.
/// Positions outside it, or past the last cell, map to nothing.
pub fn cell_at(board: Rect, size: usize, column: u16, row: u16) -> Option<Cell> {
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }
    let col = usize::from((column - board.x) / CELL_WIDTH);
    let row = usize::from(row - board.y);
    (row < size && col < size).then_some(Cell::new(row, col))
}
