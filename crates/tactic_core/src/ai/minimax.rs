//! Exhaustive minimax over tic-tac-toe positions.
//!
//! Player one is always the maximizing side and scores `+1` for a win.
//! The minimizing side places the AI's own mark and scores `-1` when
//! player two completes a line. There is no pruning; from an empty board
//! the search visits every reachable continuation.

use crate::board::Board;
use crate::types::{Move, Player};
use serde::{Deserialize, Serialize};

/// Score of a position won by player one.
pub const PLAYER_ONE_WIN: i8 = 1;
/// Score of a position won by player two.
pub const PLAYER_TWO_WIN: i8 = -1;
/// Score of a drawn position.
pub const DRAWN: i8 = 0;

/// Result of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Evaluation {
    value: i8,
    best_move: Option<Move>,
    nodes: u64,
}

impl Evaluation {
    /// Game-theoretic value: `+1`, `0` or `-1`.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// First move in row-major order reaching the value.
    ///
    /// `None` for terminal positions.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Positions visited, including the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Evaluates `board` with the given side to move.
///
/// `maximizing == true` places player one's mark; `false` places `ai`'s
/// mark. Ties keep the first move reaching the extremum, so the result is
/// deterministic for a given board.
pub fn minimax(board: &Board, maximizing: bool, ai: Player) -> Evaluation {
    let mut nodes = 0;
    let (value, best_move) = search(*board, maximizing, ai, &mut nodes);
    Evaluation::new(value, best_move, nodes)
}

fn search(board: Board, maximizing: bool, ai: Player, nodes: &mut u64) -> (i8, Option<Move>) {
    *nodes += 1;

    match board.terminal_outcome() {
        Some(Player::One) => return (PLAYER_ONE_WIN, None),
        Some(Player::Two) => return (PLAYER_TWO_WIN, None),
        None if board.is_full() => return (DRAWN, None),
        None => {}
    }

    let mark = if maximizing { Player::One } else { ai };
    let mut best: Option<(i8, Move)> = None;

    for mv in board.empty_cells() {
        let (value, _) = search(board.with_mark(mv, mark), !maximizing, ai, nodes);
        let improves = match best {
            None => true,
            Some((current, _)) if maximizing => value > current,
            Some((current, _)) => value < current,
        };
        if improves {
            best = Some((value, mv));
        }
    }

    match best {
        Some((value, mv)) => (value, Some(mv)),
        // Unreachable: a non-full board always has an empty cell.
        None => (DRAWN, None),
    }
}
