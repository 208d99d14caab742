//! Application state and logic.

use super::input::{self, Action};
use crate::controller::{Controller, GameMode, PlayError};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tactic_core::{GameOutcome, Move};
use tracing::{debug, error, instrument};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    controller: Controller,
    cursor: Move,
    status_message: String,
}

impl App {
    /// Creates a new application around a controller.
    pub fn new(controller: Controller) -> Self {
        let status_message = format!("{} to move.", controller.to_move().symbol());
        Self {
            controller,
            cursor: Move::ALL[4],
            status_message,
        }
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        let Some(action) = input::action_for(code) else {
            return Flow::Continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::PlayCursor => self.play_human(self.cursor),
            Action::ToggleMode => {
                let mode = self.controller.toggle_mode();
                self.status_message = format!("Switched to {}.", mode.label());
            }
            Action::Reset => {
                self.controller.reset();
                self.status_message = "New game.".to_string();
            }
            Action::Difficulty(mode) => {
                self.controller.set_search_mode(mode);
                self.status_message = format!("AI difficulty: {}.", mode.label());
            }
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Handles a mouse event; left clicks on the grid play that cell.
    pub fn handle_mouse(&mut self, board: Rect, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(cell) = input::cell_at(board, mouse.column, mouse.row) {
            self.cursor = cell;
            self.play_human(cell);
        }
    }

    fn play_human(&mut self, cell: Move) {
        if self.controller.ai_to_move() {
            self.status_message = "Wait for the AI to move.".to_string();
            return;
        }

        let player = self.controller.to_move();
        match self.controller.play(cell) {
            Ok(outcome) => self.status_message = describe(player.symbol(), cell, outcome),
            Err(PlayError::GameOver) => {
                self.status_message = "Game over. Press 'r' to restart.".to_string();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Lets the AI move if it is its turn.
    ///
    /// # Errors
    ///
    /// A failed AI move means the controller lost track of game over;
    /// the error is returned so the game loop can stop.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<(), PlayError> {
        if !self.controller.ai_to_move() {
            return Ok(());
        }
        let player = self.controller.to_move();
        match self.controller.play_ai_turn() {
            Ok((cell, outcome)) => {
                self.status_message = describe(player.symbol(), cell, outcome);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "AI turn failed");
                Err(e)
            }
        }
    }

    /// Current mode, for callers that only hold the app.
    pub fn mode(&self) -> GameMode {
        self.controller.mode()
    }
}

fn describe(symbol: char, cell: Move, outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::InProgress => format!("{} played {}.", symbol, cell),
        outcome => format!("{} played {}. {}.", symbol, cell, outcome),
    }
}
