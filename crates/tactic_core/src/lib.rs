//! Tactic core - tic-tac-toe game state and adversarial search.
//!
//! This crate holds everything with algorithmic content: the board model,
//! terminal-condition evaluation and the AI engine that picks moves.
//! Rendering and input live in the `tactic` binary crate.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of cells plus a marked-cell counter
//! - **Rules**: win-line scan and draw classification
//! - **AI**: random or exhaustive minimax move selection
//!
//! # Example
//!
//! ```
//! use tactic_core::{AiEngine, Board, Move, Player, SearchMode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new();
//! board.place_mark(Move::new(0, 0)?, Player::One)?;
//! board.place_mark(Move::new(0, 1)?, Player::One)?;
//!
//! let mut ai = AiEngine::new(SearchMode::OptimalSearch, Player::Two);
//! let reply = ai.select_move(&board)?;
//! assert_eq!(reply, Move::new(0, 2)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod error;
mod outcome;
mod rules;
mod types;

pub use ai::{AiEngine, Evaluation, SearchMode, minimax};
pub use board::Board;
pub use error::{BoardParseError, MoveError, SearchError};
pub use outcome::GameOutcome;
pub use rules::{Line, LINES, WinningLine, check_winner, is_draw, outcome, winning_line};
pub use types::{Cell, Move, Player};

/// Alias for clarity when talking about what occupies a cell.
pub type Mark = Player;
