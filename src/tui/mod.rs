//! Terminal User Interface (TUI) for focustrack.
//!
//! Hosts the timer and report screens. Built with ratatui and crossterm;
//! terminal focus changes stand in for the app moving to the background.

mod app;
mod event;
mod ui;

pub use app::{App, Tab};

use std::io;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::haptics;
use crate::storage::Database;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, db: &Database) -> Result<(), FocusError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .map_err(|e| FocusError::Terminal(format!("Failed to start timer runtime: {e}")))?;

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .map_err(|e| FocusError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(
        config,
        db,
        runtime.handle().clone(),
        haptics::from_config(config.general.haptics),
    );
    log::info!("timer screen opened");
    let result = run_app(&mut terminal, &mut app);
    drop(app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), FocusError> {
    loop {
        app.pump();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(event::Action::Quit) = event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
