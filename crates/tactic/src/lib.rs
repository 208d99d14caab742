//! Tactic - terminal tic-tac-toe against a minimax opponent.
//!
//! Game state and search live in [`tactic_core`]; this crate is the glue
//! around them.
//!
//! # Architecture
//!
//! - **Config**: TOML game configuration with CLI overrides
//! - **Controller**: owns one board, alternates turns, asks the AI to move
//! - **TUI**: ratatui rendering with mouse and keyboard input
//! - **Simulate**: headless AI-vs-random games for quick sanity checks

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod controller;
pub mod logging;
mod simulate;
pub mod tui;

pub use config::{AiConfig, ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use controller::{Controller, GameMode, PlayError};
pub use simulate::{SimulationReport, simulate};
