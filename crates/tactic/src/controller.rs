//! Game controller: turn order, game mode and AI turns.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tactic_core::{
    AiEngine, Board, GameOutcome, Move, MoveError, Player, SearchError, SearchMode, WinningLine,
};
use tracing::{debug, error, info, instrument};

/// Who sits on the other side of the board.
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
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp")]
    PlayerVsPlayer,
    /// A human plays against the AI engine.
    #[default]
    #[serde(rename = "ai")]
    #[strum(to_string = "ai")]
    PlayerVsAi,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsAi => "Player vs AI",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::PlayerVsPlayer => Self::PlayerVsAi,
            Self::PlayerVsAi => Self::PlayerVsPlayer,
        }
    }
}

/// Errors that can occur when playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The game has already ended; reset to play again.
    #[display("Game is already over")]
    GameOver,

    /// The AI was asked to move out of turn.
    #[display("It is not the AI's turn")]
    NotAiTurn,

    /// The move was rejected by the board.
    #[display("{}", _0)]
    Move(MoveError),

    /// The AI could not find a move.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for PlayError {}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<SearchError> for PlayError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// Owns one board and drives a game on it.
#[derive(Debug, Clone)]
pub struct Controller {
    board: Board,
    to_move: Player,
    first_player: Player,
    mode: GameMode,
    ai: AiEngine,
    running: bool,
}

impl Controller {
    /// Creates a controller for a fresh game.
    #[instrument(skip(ai), fields(ai_player = %ai.identity(), difficulty = %ai.mode()))]
    pub fn new(mode: GameMode, first_player: Player, ai: AiEngine) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            first_player,
            mode,
            ai,
            running: true,
        }
    }

    /// Creates a controller from a game configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.mode(), *config.first_player(), config.ai().engine())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the AI engine.
    pub fn ai(&self) -> &AiEngine {
        &self.ai
    }

    /// False once the game has ended.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    /// True when the AI should move next.
    pub fn ai_to_move(&self) -> bool {
        self.mode == GameMode::PlayerVsAi && self.running && self.to_move == self.ai.identity()
    }

    /// Plays `mv` for the player to move.
    ///
    /// On success returns the resulting outcome. Once the game is over the
    /// controller stops accepting moves until [`Controller::reset`].
    ///
    /// # Errors
    ///
    /// [`PlayError::GameOver`] if the game has ended, [`PlayError::Move`]
    /// if the cell is occupied. State is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move, position = %mv))]
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, PlayError> {
        if !self.running {
            debug!("Move rejected, game over");
            return Err(PlayError::GameOver);
        }

        self.board.place_mark(mv, self.to_move)?;

        let outcome = self.board.outcome();
        if outcome.is_over() {
            info!(%outcome, "Game over");
            self.running = false;
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(outcome)
    }

    /// Asks the AI for a move and plays it.
    ///
    /// # Errors
    ///
    /// [`PlayError::NotAiTurn`] if it is not the AI's turn.
    /// [`PlayError::Search`] if the AI found no move, which means the
    /// game-over check failed and should be treated as fatal.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<(Move, GameOutcome), PlayError> {
        if !self.ai_to_move() {
            return Err(PlayError::NotAiTurn);
        }

        let mv = self.ai.select_move(&self.board).map_err(|e| {
            error!(error = %e, board = %self.board, "AI move selection failed");
            PlayError::from(e)
        })?;
        let outcome = self.play(mv)?;
        Ok((mv, outcome))
    }

    /// Switches between player-vs-player and player-vs-AI.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn toggle_mode(&mut self) -> GameMode {
        self.mode = self.mode.toggle();
        info!(to = %self.mode, "Game mode changed");
        self.mode
    }

    /// Changes the AI difficulty.
    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.ai.set_mode(mode);
    }

    /// Starts a fresh game, keeping mode and difficulty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.to_move = self.first_player;
        self.running = true;
    }
}
