//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// Player one, plays X and moves first.
    One,
    /// Player two, plays O.
    Two,
}

impl Player {
    /// Returns the opponent player, i.e. who moves next.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the glyph this player draws on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }
}

/// A cell coordinate, row and column both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Side length of the board.
    pub const SIDE: usize = 3;

    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, rejecting coordinates outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `row` or `col` is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= Self::SIDE || col >= Self::SIDE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIDE + self.col
    }

    /// Row of this cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this cell.
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
