//! Application state and key handling.

use crate::input::{move_cursor, move_selection};
use crossterm::event::KeyCode;
use replay_tictactoe::{GameEngine, GameView, Position, SortOrder};
use tracing::{debug, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Only UI state lives here; everything about the game is read back from the
/// engine's view each frame.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with the given initial move-list order.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            engine: GameEngine::new().with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            notice: None,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Derives the view to draw.
    pub fn view(&self) -> GameView {
        self.engine.current_view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history panel (display order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last message for the help line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        self.notice = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('s') => {
                self.engine.toggle_sort_order();
                self.sync_selection();
            }
            KeyCode::Char('r') => {
                self.engine.restart();
                self.cursor = Position::Center;
                self.sync_selection();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::History => {
                    let len = self.engine.history_len();
                    self.selected = move_selection(self.selected, len, code);
                }
            },
        }

        AppAction::Continue
    }

    fn play(&mut self, pos: Position) {
        debug!(position = %pos, "Playing at square");
        self.engine.play(pos);
        self.sync_selection();
    }

    fn jump_to_selected(&mut self) {
        let view = self.engine.current_view();
        let Some(entry) = view.moves().get(self.selected) else {
            return;
        };

        if let Err(e) = self.engine.jump_to(*entry.index()) {
            warn!(error = %e, "Jump rejected");
            self.notice = Some(e.to_string());
        }
        self.sync_selection();
    }

    /// Points the history selection at the viewed move.
    fn sync_selection(&mut self) {
        let view = self.engine.current_view();
        self.selected = view
            .moves()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
