//! Game outcome classification.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a board, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// Player one completed a line.
    PlayerOneWins,
    /// Player two completed a line.
    PlayerTwoWins,
    /// The board is full with no complete line.
    Draw,
}

impl GameOutcome {
    /// Outcome for a game won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameOutcome::PlayerOneWins,
            Player::Two => GameOutcome::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::PlayerOneWins => Some(Player::One),
            GameOutcome::PlayerTwoWins => Some(Player::Two),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::PlayerOneWins => write!(f, "Player one (X) wins"),
            GameOutcome::PlayerTwoWins => write!(f, "Player two (O) wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
