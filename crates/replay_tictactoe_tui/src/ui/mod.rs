//! UI rendering using ratatui.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use replay_tictactoe::Status;

pub use board::render_board;
pub use history::render_history;

const HELP: &str = "Arrows: move | Enter: play/jump | 1-9: play | Tab: panel | S: sort | R: restart | Q: quit";

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Replay Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_board(f, body[0], &view, app.cursor(), app.focus());
    render_history(f, body[1], &view, app.selected(), app.focus());

    let status_color = match view.status() {
        Status::InProgress(_) => Color::Yellow,
        Status::Won(_) => Color::Green,
        Status::Draw => Color::Magenta,
    };
    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let (help_text, help_style) = match app.notice() {
        Some(notice) => (notice, Style::default().fg(Color::Red)),
        None => (HELP, Style::default().fg(Color::DarkGray)),
    };
    let help = Paragraph::new(help_text)
        .style(help_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
