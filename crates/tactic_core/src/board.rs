//! The 3x3 board and its marked-cell bookkeeping.

use crate::error::{BoardParseError, MoveError};
use crate::outcome::GameOutcome;
use crate::rules::{self, WinningLine};
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The board is a plain `Copy` value, so hypothetical positions are
/// explored by copying it rather than by undoing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; Move::SIDE]; Move::SIDE],
    marked: u8,
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = Move::SIDE * Move::SIDE;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark.
    /// The board is left unchanged in that case.
    pub fn place_mark(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(mv) {
            return Err(MoveError::Occupied(mv));
        }
        self.cells[mv.row()][mv.col()] = Cell::Marked(player);
        self.marked += 1;
        Ok(())
    }

    /// Returns a copy of this board with `player`'s mark placed at `mv`.
    ///
    /// Used by the search so every branch works on its own board.
    pub(crate) fn with_mark(mut self, mv: Move, player: Player) -> Self {
        self.cells[mv.row()][mv.col()] = Cell::Marked(player);
        self.marked += 1;
        self
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Checks if a cell is unmarked.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Returns every unmarked cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Number of marked cells (0-9).
    pub fn marked_count(&self) -> usize {
        usize::from(self.marked)
    }

    /// True when all nine cells are marked.
    pub fn is_full(&self) -> bool {
        self.marked_count() == Self::CELLS
    }

    /// True when no cell is marked.
    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Returns the winner, if any line is complete.
    ///
    /// `None` means "no winner yet", which is not the same as a draw;
    /// use [`Board::outcome`] to tell the two apart.
    pub fn terminal_outcome(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns the first completed line in scan order, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Classifies the board as won, drawn or still in progress.
    #[instrument(skip(self), fields(marked = self.marked))]
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; Move::SIDE]; Move::SIDE] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (r * Move::SIDE + c + 1).to_string(),
                    Cell::Marked(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if c < Move::SIDE - 1 {
                    result.push('|');
                }
            }
            if r < Move::SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parses boards written as nine cells, e.g. `"XO.|.X.|..O"`.
///
/// `X` is player one, `O` is player two, `.`, `-` or `_` is empty.
/// Whitespace and `|` separators are ignored. Cells are placed without
/// any turn-order check, so unreachable positions can be described.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != Self::CELLS {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (mv, ch) in Move::ALL.iter().copied().zip(cells) {
            let player = match ch.to_ascii_uppercase() {
                'X' => Player::One,
                'O' => Player::Two,
                '.' | '-' | '_' => continue,
                other => return Err(BoardParseError::UnknownMark(other)),
            };
            board = board.with_mark(mv, player);
        }
        Ok(board)
    }
}
