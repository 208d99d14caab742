//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Vertical line through the given column.
    Column(usize),
    /// Horizontal line through the given row.
    Row(usize),
    /// Top-left to bottom-right: (0,0), (1,1), (2,2).
    Descending,
    /// Bottom-left to top-right: (2,0), (1,1), (0,2).
    Ascending,
}

/// All lines, in the order they are scanned.
///
/// Columns first, then rows, then the descending diagonal, then the
/// ascending one. On a board with several complete lines the earliest
/// entry here decides the reported winner.
pub const LINES: [Line; 8] = [
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::Descending,
    Line::Ascending,
];

impl Line {
    /// The three cells of this line, first to last.
    pub fn cells(self) -> [Move; 3] {
        match self {
            Line::Column(c) => [Move::at(0, c), Move::at(1, c), Move::at(2, c)],
            Line::Row(r) => [Move::at(r, 0), Move::at(r, 1), Move::at(r, 2)],
            Line::Descending => [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
            Line::Ascending => [Move::at(2, 0), Move::at(1, 1), Move::at(0, 2)],
        }
    }

    /// True if `mv` lies on this line.
    pub fn contains(self, mv: Move) -> bool {
        self.cells().contains(&mv)
    }
}

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    player: Player,
    line: Line,
}

impl WinningLine {
    /// The player owning all three cells.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Which line was completed.
    pub fn line(&self) -> Line {
        self.line
    }

    /// First and last cell of the line, the endpoints a renderer strokes between.
    pub fn endpoints(&self) -> (Move, Move) {
        let [first, _, last] = self.line.cells();
        (first, last)
    }
}

/// Finds the first complete line in scan order.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().copied().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Cell::Marked(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinningLine::new(player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. `None` does not imply a draw.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|w| w.player())
}
