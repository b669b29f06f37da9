//! Bakso TUI - ingredient costing and usage analysis
//!
//! Terminal UI for managing a bakso stall's ingredients, batches and
//! ingredient co-usage analysis.

mod app;
mod commands;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use bakso_core::BaksoConfig;

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they stay out of the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bakso").join("config.toml"))
}

/// Read the config file when present, defaults otherwise
fn load_config() -> Result<BaksoConfig, Box<dyn std::error::Error>> {
    let Some(path) = config_path().filter(|p| p.exists()) else {
        tracing::debug!("no config file, using defaults");
        return Ok(BaksoConfig::default());
    };

    let text = std::fs::read_to_string(&path)?;
    let config = BaksoConfig::from_toml(&text)?;
    config.validate()?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.refresh_report();
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
