//! Terminal front end for Replay Tic-Tac-Toe.
//!
//! Translates key presses into [`replay_tictactoe::GameEngine`] commands and
//! renders the engine's view with ratatui.

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
