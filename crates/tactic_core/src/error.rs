//! Error types for board mutation and move search.

use crate::types::Move;

/// Error raised when a move cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error raised by move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Move selection was requested on a board without empty cells.
    #[display("No legal moves remain on the board")]
    NoLegalMoves,
}

impl std::error::Error for SearchError {}

/// Error raised when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A character is not a known mark.
    #[display("Unrecognized cell character {:?}", _0)]
    UnknownMark(char),
}

impl std::error::Error for BoardParseError {}
