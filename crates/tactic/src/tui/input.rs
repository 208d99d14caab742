//! Input mapping: mouse clicks to cells, keys to actions.

use super::ui::{CELL_HEIGHT, CELL_WIDTH};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tactic_core::{Move, SearchMode};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Toggle player-vs-player and player-vs-AI.
    ToggleMode,
    /// Start a new game.
    Reset,
    /// Change AI difficulty.
    Difficulty(SearchMode),
    /// Leave the game.
    Quit,
}

/// Maps a key to its action, if it has one.
pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(code)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Action::ToggleMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('0') => Some(Action::Difficulty(SearchMode::Random)),
        KeyCode::Char('1') => Some(Action::Difficulty(SearchMode::OptimalSearch)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Move::new(row, col).unwrap_or(cursor)
}

/// Maps a terminal coordinate inside the board area to a cell.
///
/// Returns `None` for clicks outside the grid.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Move> {
    if column < board.x || row < board.y {
        return None;
    }
    let dx = column - board.x;
    let dy = row - board.y;
    if dx >= board.width || dy >= board.height {
        return None;
    }
    Move::new(usize::from(dy / CELL_HEIGHT), usize::from(dx / CELL_WIDTH)).ok()
}
