//! Terminal UI for tactic.

mod app;
pub mod input;
pub mod ui;

pub use app::{App, Flow};

use crate::config::GameConfig;
use crate::controller::Controller;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(Controller::from_config(config));
    let res = run_game(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_game(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Draw the human move before the AI starts searching.
        if app.controller().ai_to_move() {
            app.play_ai_turn().context("AI failed to move")?;
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let board = ui::board_area(Rect::new(0, 0, size.width, size.height));
                debug!(column = mouse.column, row = mouse.row, "Mouse event");
                app.handle_mouse(board, mouse);
            }
            _ => {}
        }
    }
}
