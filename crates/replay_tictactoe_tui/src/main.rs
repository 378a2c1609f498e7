//! Replay Tic-Tac-Toe - terminal binary.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use replay_tictactoe::SortOrder;
use replay_tictactoe_tui::{App, AppAction, Cli, TuiConfig, ui};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config)?;

    info!(config = ?config, "Starting Replay Tic-Tac-Toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.sort_order());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Exiting");
    Ok(())
}

/// Reads the config file (if present) and applies CLI overrides.
fn load_config(cli: &Cli) -> Result<TuiConfig> {
    let mut config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }
    if cli.descending {
        config = config.with_sort_order(SortOrder::Descending);
    }
    Ok(config)
}

/// Logs go to a file so they do not draw over the terminal UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Draw, wait for a key, apply it; until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
