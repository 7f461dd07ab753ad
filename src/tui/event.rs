//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusError;
use crate::tui::app::{App, Tab};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, FocusError> {
    // Short poll so ticks are drawn promptly
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| FocusError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FocusError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        Event::FocusGained => {
            app.focus_gained();
            Ok(None)
        }
        Event::FocusLost => {
            app.focus_lost();
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// Apply a key press to the app.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // A notice blocks everything but dismissing it
    if app.notice.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_notice(),
            KeyCode::Char('q') => return Some(Action::Quit),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
        KeyCode::Char('?') => app.status = Some(app.help().to_string()),
        code => match app.tab {
            Tab::Timer => handle_timer_key(app, code),
            Tab::Report => handle_report_key(app, code),
        },
    }

    None
}

fn handle_timer_key(app: &mut App<'_>, code: KeyCode) {
    match code {
        KeyCode::Char('c') | KeyCode::Right => app.cycle_category(true),
        KeyCode::Char('C') | KeyCode::Left => app.cycle_category(false),
        KeyCode::Char('p') => app.cycle_preset(),
        KeyCode::Char('+' | '=') | KeyCode::Up => app.adjust(1),
        KeyCode::Char('-') | KeyCode::Down => app.adjust(-1),
        KeyCode::Char(']') => app.adjust(5),
        KeyCode::Char('[') => app.adjust(-5),
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

fn handle_report_key(app: &mut App<'_>, code: KeyCode) {
    match code {
        KeyCode::Char('r') => {
            app.activate_report();
            app.status = Some("Refreshed".to_string());
        }
        KeyCode::Char('s') => app.seed(),
        KeyCode::Char('x') => app.clear(),
        _ => {}
    }
}
