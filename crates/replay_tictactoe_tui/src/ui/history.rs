//! Move-history panel.

use crate::app::Focus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use replay_tictactoe::GameView;

/// Renders the sort control and the move list.
///
/// The viewed move is bold; the selection is only highlighted while the panel
/// has focus.
pub fn render_history(f: &mut Frame, area: Rect, view: &GameView, selected: usize, focus: Focus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let sort = Paragraph::new(format!("[S] {}", view.sort_order().toggle_label()))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(sort, chunks[0]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.description().as_str()).style(style)
        })
        .collect();

    let border_style = match focus {
        Focus::History => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("History"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focus == Focus::History {
        state.select(Some(selected));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}
