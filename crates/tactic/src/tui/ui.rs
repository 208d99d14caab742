//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::controller::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactic_core::{Cell, GameOutcome, Move, Player};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 11;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 5;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;
const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 5;

const X_GLYPH: [&str; 3] = ["\\   /", "  X  ", "/   \\"];
const O_GLYPH: [&str; 3] = ["╭───╮", "│   │", "╰───╯"];

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Blue,
        Player::Two => Color::Red,
    }
}

fn sections(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Screen area covered by the grid when the terminal is `area`.
///
/// Both drawing and click mapping go through this, so they agree.
pub fn board_area(area: Rect) -> Rect {
    center_rect(sections(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, _, status_area] = sections(area);

    let title = Paragraph::new("Tactic - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, title_area);

    draw_board(frame, board_area(area), app);
    draw_status(frame, status_area, app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let winning = controller.winning_line();

    for cell in Move::ALL {
        let rect = Rect::new(
            area.x + CELL_WIDTH * cell.col() as u16,
            area.y + CELL_HEIGHT * cell.row() as u16,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }

        let on_win_line = winning.is_some_and(|w| w.line().contains(cell));
        let border_style = if on_win_line {
            winning
                .map(|w| Style::default().fg(player_color(w.player())).add_modifier(Modifier::BOLD))
                .unwrap_or_default()
        } else if cell == app.cursor() && controller.is_running() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        draw_cell(frame, inner, controller.board().get(cell), on_win_line);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlight: bool) {
    let Cell::Marked(player) = cell else {
        return;
    };
    let glyph = match player {
        Player::One => X_GLYPH,
        Player::Two => O_GLYPH,
    };
    let mut style = Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD);
    if highlight {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines: Vec<Line> = glyph
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let ai = controller.ai();

    let headline = match controller.outcome() {
        GameOutcome::InProgress => {
            let player = controller.to_move();
            if controller.ai_to_move() {
                format!("AI ({}) is thinking...", player.symbol())
            } else {
                format!("{} to move", player.symbol())
            }
        }
        outcome => format!("{}! Press 'r' to play again.", outcome),
    };

    let settings = match controller.mode() {
        GameMode::PlayerVsPlayer => controller.mode().label().to_string(),
        GameMode::PlayerVsAi => format!(
            "{} | AI: {} (plays {})",
            controller.mode().label(),
            ai.mode().label(),
            ai.identity().symbol()
        ),
    };

    let lines = vec![
        Line::from(Span::styled(headline, Style::default().fg(Color::Yellow))),
        Line::from(Span::raw(app.status_message().to_string())),
        Line::from(Span::styled(
            format!("{} | click/arrows+enter: move  g: mode  r: reset  0/1: difficulty  q: quit", settings),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
