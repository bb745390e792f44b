use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use timeless_trips::config::AppConfig;
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::tui::app::AppState;
use timeless_trips::tui::services::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args().any(|arg| arg == "--check") {
        return check();
    }

    // File-only logging; the terminal belongs to ratatui
    let _log_guard = timeless_trips::core::logging::init_tui();
    log::info!("Timeless Trips v{} starting", timeless_trips::VERSION);

    let config = AppConfig::load();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = match Services::init(&config, event_tx) {
        Ok(services) => services,
        Err(e) => {
            log::error!("Failed to load fixtures: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut app = AppState::new(event_rx, services, config.start_route());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("TUI exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Timeless Trips exiting");
    Ok(())
}

/// Validate the configured fixtures and print a summary, without a TUI.
fn check() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = timeless_trips::core::logging::init();
    let config = AppConfig::load();

    let store = match config.data.fixtures_dir.as_deref() {
        Some(dir) => FixtureStore::load_dir(dir)?,
        None => FixtureStore::bundled().clone(),
    };

    println!(
        "{} photos, {} timeline entries, {} guides, {} destinations",
        store.photos.len(),
        store.timeline.len(),
        store.guides.len(),
        store.destinations.len()
    );
    Ok(())
}
