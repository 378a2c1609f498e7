//! Tic-tac-toe board rendering.

use crate::app::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use replay_tictactoe::{Cell, GameView, Player, Position};

/// Renders the board with the cursor and any winning line highlighted.
///
/// The cursor is hidden once the viewed board is won or drawn.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, cursor: Position, focus: Focus) {
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

    let cursor = (focus == Focus::Board && !view.status().is_terminal()).then_some(cursor);
    for row in 0..3 {
        render_row(f, rows[row * 2], view, cursor, row);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, view: &GameView, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_cell(f, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, view: &GameView, cursor: Option<Position>, pos: Position) {
    let cell = view.board().get(pos);
    // Finished boards drop the keypad hints on empty cells.
    let text = match cell.symbol() {
        Some(mark) => mark.to_string(),
        None if view.status().is_terminal() => String::new(),
        None => (pos.to_index() + 1).to_string(),
    };
    let base_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Player::O) => {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        }
    };

    let style = if view.is_highlighted(pos) {
        base_style.fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        base_style
    };
    let style = if cursor == Some(pos) {
        style.bg(Color::White)
    } else {
        style
    };

    // Pad vertically so the mark sits in the middle of the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", text), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
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
