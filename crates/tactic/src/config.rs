//! Game configuration loaded from TOML.

use crate::controller::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tactic_core::{AiEngine, Player, SearchMode};
use tracing::{debug, info, instrument};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "tactic.toml";

/// Settings for the computer player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// Random or optimal move selection.
    #[serde(default)]
    search_mode: SearchMode,

    /// Which mark the AI plays.
    #[serde(default = "default_ai_player")]
    player: Player,

    /// Seed for random move selection; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_ai_player() -> Player {
    Player::Two
}

#[instrument]
fn default_first_player() -> Player {
    Player::One
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tactic.log")
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::default(),
            player: default_ai_player(),
            seed: None,
        }
    }
}

impl AiConfig {
    /// Creates an AI configuration.
    pub fn new(search_mode: SearchMode, player: Player, seed: Option<u64>) -> Self {
        Self {
            search_mode,
            player,
            seed,
        }
    }

    /// Builds the engine described by this configuration.
    #[instrument(skip(self), fields(mode = %self.search_mode, player = %self.player))]
    pub fn engine(&self) -> AiEngine {
        match self.seed {
            Some(seed) => AiEngine::with_seed(self.search_mode, self.player, seed),
            None => AiEngine::new(self.search_mode, self.player),
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human vs human or human vs AI.
    #[serde(default)]
    mode: GameMode,

    /// Who moves first after a reset.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Computer player settings.
    #[serde(default)]
    ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            first_player: default_first_player(),
            log_file: default_log_file(),
            ai: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.ai.search_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Sets the game mode.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Sets the player who moves first.
    pub fn set_first_player(&mut self, player: Player) {
        self.first_player = player;
    }

    /// Sets the AI search mode.
    pub fn set_search_mode(&mut self, search_mode: SearchMode) {
        self.ai.search_mode = search_mode;
    }

    /// Sets which mark the AI plays.
    pub fn set_ai_player(&mut self, player: Player) {
        self.ai.player = player;
    }

    /// Sets the AI's random seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.ai.seed = Some(seed);
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
