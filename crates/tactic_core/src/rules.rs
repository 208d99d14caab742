//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the board stays a plain value.

pub mod draw;
pub mod win;

pub use draw::{is_draw, outcome};
pub use win::{Line, LINES, WinningLine, check_winner, winning_line};
