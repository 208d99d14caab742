//! Headless games of the configured AI against a random opponent.

use crate::controller::{Controller, GameMode, PlayError};
use crate::config::AiConfig;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tactic_core::{GameOutcome, Player, SearchError, SearchMode};
use tracing::{debug, info, instrument};

/// Tally of a batch of simulated games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Games won by the AI.
    ai_wins: u32,
    /// Games won by the random opponent.
    opponent_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Mark played by the AI.
    ai_player: Player,
    /// AI difficulty used.
    search_mode: SearchMode,
}

impl SimulationReport {
    fn new(ai_player: Player, search_mode: SearchMode) -> Self {
        Self {
            games: 0,
            ai_wins: 0,
            opponent_wins: 0,
            draws: 0,
            ai_player,
            search_mode,
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome.winner() {
            Some(winner) if winner == self.ai_player => self.ai_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, AI ({}, plays {}): {} wins, {} losses, {} draws",
            self.games,
            self.search_mode.label(),
            self.ai_player.symbol(),
            self.ai_wins,
            self.opponent_wins,
            self.draws
        )
    }
}

/// Plays `games` full games of the AI against a seeded random opponent.
///
/// # Errors
///
/// Propagates any [`PlayError`] from the controller; with a correct
/// game-over check none occurs.
#[instrument(skip(ai), fields(mode = %ai.search_mode(), ai_player = %ai.player()))]
pub fn simulate(
    ai: &AiConfig,
    first_player: Player,
    games: u32,
    seed: u64,
) -> Result<SimulationReport, PlayError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut controller = Controller::new(GameMode::PlayerVsAi, first_player, ai.engine());
    let mut report = SimulationReport::new(*ai.player(), *ai.search_mode());

    for game in 0..games {
        controller.reset();
        while controller.is_running() {
            if controller.ai_to_move() {
                controller.play_ai_turn()?;
            } else {
                let cell = *controller
                    .board()
                    .empty_cells()
                    .choose(&mut rng)
                    .ok_or(PlayError::Search(SearchError::NoLegalMoves))?;
                controller.play(cell)?;
            }
        }
        let outcome = controller.outcome();
        debug!(game, %outcome, "Simulated game finished");
        report.record(outcome);
    }

    info!(%report, "Simulation complete");
    Ok(report)
}
