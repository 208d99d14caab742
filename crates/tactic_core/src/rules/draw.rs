//! Draw detection and outcome classification.

use super::win::check_winner;
use crate::board::Board;
use crate::outcome::GameOutcome;

/// True when the board is full and no line is complete.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Combines the win scan with fullness into a [`GameOutcome`].
pub fn outcome(board: &Board) -> GameOutcome {
    match check_winner(board) {
        Some(player) => GameOutcome::won_by(player),
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}
