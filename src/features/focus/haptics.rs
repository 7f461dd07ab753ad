//! Interaction feedback.
//!
//! Feedback is best-effort: implementations must never fail or block the caller.

use std::io::Write;

/// Strength of a feedback pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Selecting a category or duration
    Tap,
    /// Start, pause, or reset
    Press,
    /// Focus was lost during a session
    Alert,
    /// A session finished
    Long,
}

impl Pulse {
    /// Whether this pulse should get the user's attention.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(self, Self::Alert | Self::Long)
    }
}

/// Sink for interaction feedback.
#[cfg_attr(test, mockall::automock)]
pub trait Haptics {
    /// Emit a feedback pulse.
    fn pulse(&self, pulse: Pulse);
}

/// Rings the terminal bell for alert-level pulses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&self, pulse: Pulse) {
        if !pulse.is_alert() {
            return;
        }

        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            log::debug!("terminal bell failed: {e}");
        }
    }
}

/// Feedback disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Haptics for Silent {
    fn pulse(&self, _pulse: Pulse) {}
}

/// Pick the feedback sink from the `general.haptics` setting.
#[must_use]
pub fn from_config(enabled: bool) -> Box<dyn Haptics + Send> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}

impl<T: Haptics + ?Sized> Haptics for Box<T> {
    fn pulse(&self, pulse: Pulse) {
        (**self).pulse(pulse);
    }
}
