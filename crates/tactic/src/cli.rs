//! Command-line interface for tactic.

use crate::config::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::controller::GameMode;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tactic_core::{Player, SearchMode};
use tracing::instrument;

/// Tactic - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tactic")]
#[command(about = "Tic-tac-toe in the terminal, against a friend or a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play {
        /// Configuration options
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Run headless games of the AI against a random opponent
    Simulate {
        /// Configuration options
        #[command(flatten)]
        config: ConfigArgs,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for the random opponent
        #[arg(long, default_value = "0")]
        opponent_seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax evaluation of a position
    Evaluate {
        /// Board as nine cells, e.g. "XX.|.O.|..." (X, O, and . for empty)
        board: String,

        /// Configuration options
        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            config: ConfigArgs::default(),
        }
    }
}

/// Options shared by every command that builds a game.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Game mode: pvp or ai
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// AI difficulty: random (0) or optimal (1)
    #[arg(short, long)]
    pub difficulty: Option<SearchMode>,

    /// Mark played by the AI: one or two
    #[arg(long)]
    pub ai_player: Option<Player>,

    /// Player who moves first: one or two
    #[arg(long)]
    pub first_player: Option<Player>,

    /// Seed for the AI's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            mode: None,
            difficulty: None,
            ai_player: None,
            first_player: None,
            seed: None,
        }
    }
}

impl ConfigArgs {
    /// Loads the config file, then applies command-line overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = GameConfig::load_or_default(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config.set_search_mode(difficulty);
        }
        if let Some(player) = self.ai_player {
            config.set_ai_player(player);
        }
        if let Some(player) = self.first_player {
            config.set_first_player(player);
        }
        if let Some(seed) = self.seed {
            config.set_seed(seed);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tactic"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Play { .. }));
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "tactic",
            "play",
            "--mode",
            "pvp",
            "--difficulty",
            "random",
            "--ai-player",
            "one",
        ])
        .unwrap();
        let Some(Command::Play { config }) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(config.mode, Some(GameMode::PlayerVsPlayer));
        assert_eq!(config.difficulty, Some(SearchMode::Random));
        assert_eq!(config.ai_player, Some(Player::One));
        assert_eq!(config.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_simulate_flags() {
        let cli =
            Cli::try_parse_from(["tactic", "simulate", "-n", "5", "-d", "1", "--json"]).unwrap();
        let Some(Command::Simulate {
            config,
            games,
            opponent_seed,
            json,
        }) = cli.command
        else {
            panic!("expected simulate");
        };
        assert_eq!(games, 5);
        assert_eq!(opponent_seed, 0);
        assert!(json);
        assert_eq!(config.difficulty, Some(SearchMode::OptimalSearch));
    }

    #[test]
    fn test_evaluate_takes_board() {
        let cli = Cli::try_parse_from(["tactic", "evaluate", "XX.|...|..."]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Evaluate { ref board, .. }) if board == "XX.|...|..."
        ));
    }

    #[test]
    fn test_bad_difficulty_rejected() {
        assert!(Cli::try_parse_from(["tactic", "play", "--difficulty", "hard"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
