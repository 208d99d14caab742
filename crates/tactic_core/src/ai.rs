//! AI engine: picks the move for the computer player.

pub mod minimax;

pub use minimax::{Evaluation, minimax};

use crate::board::Board;
use crate::error::SearchError;
use crate::types::{Move, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Move-selection policy of the AI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SearchMode {
    /// Uniformly random empty cell.
    #[strum(to_string = "random", serialize = "0")]
    Random,
    /// Exhaustive minimax.
    #[default]
    #[serde(alias = "optimal")]
    #[strum(to_string = "optimal_search", serialize = "optimal", serialize = "1")]
    OptimalSearch,
}

impl SearchMode {
    /// Label for menus and status lines.
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Random => "Random",
            SearchMode::OptimalSearch => "Optimal",
        }
    }
}

/// Computer player.
///
/// Holds no game state. Every call to [`AiEngine::select_move`] reads
/// the caller's board and searches over private copies of it.
#[derive(Debug, Clone)]
pub struct AiEngine {
    mode: SearchMode,
    identity: Player,
    rng: StdRng,
}

impl AiEngine {
    /// Creates an engine with an entropy-seeded random source.
    #[instrument]
    pub fn new(mode: SearchMode, identity: Player) -> Self {
        Self::with_rng(mode, identity, StdRng::from_entropy())
    }

    /// Creates an engine whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(mode: SearchMode, identity: Player, seed: u64) -> Self {
        Self::with_rng(mode, identity, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: SearchMode, identity: Player, rng: StdRng) -> Self {
        let engine = Self { mode, identity, rng };
        engine.warn_if_unverified();
        engine
    }

    /// Current search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Changes the search mode.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: SearchMode) {
        info!(to = %mode, "AI search mode changed");
        self.mode = mode;
        self.warn_if_unverified();
    }

    /// Which player the AI plays.
    pub fn identity(&self) -> Player {
        self.identity
    }

    /// Selects the AI's move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMoves`] if the board has no empty
    /// cell. Callers should have detected game over before asking.
    #[instrument(skip(self, board), fields(mode = %self.mode, ai = %self.identity, marked = board.marked_count()))]
    pub fn select_move(&mut self, board: &Board) -> Result<Move, SearchError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            warn!("Move requested on a full board");
            return Err(SearchError::NoLegalMoves);
        }

        let chosen = match self.mode {
            SearchMode::Random => *empty.choose(&mut self.rng).ok_or(SearchError::NoLegalMoves)?,
            SearchMode::OptimalSearch => {
                let eval = self.evaluate(board);
                debug!(value = eval.value(), nodes = eval.nodes(), "Minimax finished");
                // A decided board still has empty cells; fall back to the first one.
                eval.best_move().unwrap_or(empty[0])
            }
        };

        info!(position = %chosen, "AI chose move");
        Ok(chosen)
    }

    /// Runs the top-level minimax call, with the AI as the minimizing side.
    pub fn evaluate(&self, board: &Board) -> Evaluation {
        minimax(board, false, self.identity)
    }

    fn warn_if_unverified(&self) {
        if self.mode == SearchMode::OptimalSearch && self.identity == Player::One {
            warn!(
                "Optimal search assumes the AI minimizes as player two; \
                 playing as player one is not verified"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!(SearchMode::from_str("random").unwrap(), SearchMode::Random);
        assert_eq!(SearchMode::from_str("0").unwrap(), SearchMode::Random);
        assert_eq!(
            SearchMode::from_str("optimal").unwrap(),
            SearchMode::OptimalSearch
        );
        assert_eq!(
            SearchMode::from_str("Optimal_Search").unwrap(),
            SearchMode::OptimalSearch
        );
        assert_eq!(SearchMode::from_str("1").unwrap(), SearchMode::OptimalSearch);
        assert!(SearchMode::from_str("hard").is_err());
    }

    #[test]
    fn test_search_mode_display_round_trips() {
        for mode in [SearchMode::Random, SearchMode::OptimalSearch] {
            assert_eq!(SearchMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_set_mode() {
        let mut ai = AiEngine::with_seed(SearchMode::Random, Player::Two, 7);
        ai.set_mode(SearchMode::OptimalSearch);
        assert_eq!(ai.mode(), SearchMode::OptimalSearch);
        assert_eq!(ai.identity(), Player::Two);
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        for mode in [SearchMode::Random, SearchMode::OptimalSearch] {
            let mut ai = AiEngine::with_seed(mode, Player::Two, 1);
            assert_eq!(ai.select_move(&board), Err(SearchError::NoLegalMoves));
        }
    }

    #[test]
    fn test_decided_board_still_returns_empty_cell() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        let mut ai = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 1);
        let mv = ai.select_move(&board).unwrap();
        assert!(board.is_empty(mv));
    }
}
