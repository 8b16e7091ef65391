//! Terminal UI for the guessing game.

mod app;
mod ui;

pub use app::{App, AppAction, LoadEvent};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::catalog::CatalogClient;
use crate::config::GameConfig;
use crate::controller::SessionController;

/// Runs the interactive game until the player quits.
pub async fn run_tui(config: GameConfig, log_path: &Path) -> Result<()> {
    // Log to a file so output doesn't corrupt the terminal
    let log_file = std::fs::File::create(log_path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strictly_creatures=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_path = %log_path.display(), "Starting Strictly Creatures TUI");

    let client = CatalogClient::new(&config)?;
    let mut app = App::new(SessionController::from_config(&config), Arc::new(client));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.begin_session();

    loop {
        app.drain_loads();
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
