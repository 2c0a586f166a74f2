//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position, Square, WinningLine};

const CELL_WIDTH: u16 = 12;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;

/// Renders the headline, the board and the key hints.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Key hints
        ])
        .split(frame.area());

    let headline = Paragraph::new(app.headline())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(headline, chunks[0]);

    draw_board(frame, chunks[1], app, palette);

    let hints = Paragraph::new("arrows: move  enter/1-9: place  r: reset game  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let line = app.engine().winning_line();
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, line, palette, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    line: Option<WinningLine>,
    palette: &Palette,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for column in 0..3 {
        if let Some(pos) = Position::from_row_column(row, column) {
            let style = cell_style(app, line, palette, pos);
            draw_cell(frame, cols[column * 2], app, pos, style);
        }
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn cell_style(app: &App, line: Option<WinningLine>, palette: &Palette, pos: Position) -> Style {
    let base = match app.engine().board().get(pos) {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
    };

    let base = if line.is_some_and(|l| l.contains(pos)) {
        base.bg(palette.highlight)
    } else {
        base
    };

    if pos == app.cursor() && app.engine().is_active() {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, style: Style) {
    let symbol = match app.engine().board().get(pos) {
        Square::Empty => format!("{}", pos.to_index() + 1),
        Square::Occupied(player) => player.to_string(),
    };

    // Three lines tall: the mark sits on the middle one.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)));

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
