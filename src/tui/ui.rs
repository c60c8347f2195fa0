//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{Cell, Coord, Mode};

use super::app::{App, Screen};

const WINNER_COLOR: Color = Color::Rgb(0xEE, 0xB4, 0x3F);

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board or menu
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::ModeSelect { highlighted } => draw_menu(frame, chunks[1], highlighted),
        Screen::Playing | Screen::PlayAgain | Screen::TieAck => draw_board(frame, chunks[1], app),
    }

    let mut status = vec![Line::from(app.status())];
    if let Some(action) = app.last_action() {
        status.push(Line::from(Span::styled(
            action.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(help_text(app.screen()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::ModeSelect { .. } => "↑/↓ choose · Enter select · h/c shortcut · q quit",
        Screen::Playing => "Arrows move · Enter/Space or 1-9 place · r reset · m mode · q quit",
        Screen::PlayAgain => "y play again · n change mode · q quit",
        Screen::TieAck => "Any key: new game · q quit",
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, highlighted: Mode) {
    let lines: Vec<Line> = Mode::iter()
        .map(|mode| {
            let style = if mode == highlighted {
                Style::default().bg(Color::White).fg(Color::Black)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("  {}  ", mode.label()), style))
        })
        .collect();

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game mode").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 40, 4));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, coord) in Coord::ALL[row * 3..row * 3 + 3].iter().enumerate() {
        draw_cell(frame, cols[col * 2], app, *coord);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let cell = app.state().board().get(coord);

    let (symbol, base_style) = match cell {
        Cell::Empty => (
            format!(" {} ", coord.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::X => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = app.winning_line().is_some_and(|line| line.contains(coord));
    let style = if on_winning_line {
        base_style.fg(WINNER_COLOR)
    } else if app.screen() == Screen::Playing && coord == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
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
