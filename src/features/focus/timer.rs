//! Countdown state machine for focus sessions.
//!
//! The timer knows nothing about wall-clock time or storage: the controller
//! feeds it ticks and lifecycle signals and acts on what it returns.

use serde::{Deserialize, Serialize};

use crate::error::FocusError;

/// Shortest duration `adjust` will leave on the clock, in seconds.
pub const MIN_DURATION_SECS: u32 = 60;

/// Longest duration the timer accepts, in seconds.
pub const MAX_DURATION_SECS: u32 = 24 * 60 * 60;

/// Phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Ready to start, clock shows the full duration
    Idle,
    /// Counting down
    Running,
    /// Stopped part-way, by the user or by losing focus
    Paused,
    /// Reached zero; waiting for acknowledgment
    Completed,
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// What finished when the countdown reached zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Planned duration in seconds
    pub duration: u32,
    /// Category selected at completion; only these sessions are recorded
    pub category: Option<String>,
    /// Distractions accumulated during the session
    pub distractions: u32,
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running
    Ignored,
    /// One second elapsed, this much remains
    Counting(u32),
    /// The countdown reached zero
    Completed(Completion),
}

/// A focus countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    /// Selected duration in seconds
    initial_seconds: u32,
    /// Seconds left on the clock
    remaining_seconds: u32,
    /// Current phase
    phase: TimerPhase,
    /// Times focus was lost while running
    distractions: u32,
    /// Selected category
    category: Option<String>,
}

impl FocusTimer {
    /// Create an idle timer for the given number of minutes.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        let seconds = minutes
            .saturating_mul(60)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Self {
            initial_seconds: seconds,
            remaining_seconds: seconds,
            phase: TimerPhase::Idle,
            distractions: 0,
            category: None,
        }
    }

    /// Select the category the session will be filed under.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while the timer is running.
    pub fn select_category(&mut self, category: impl Into<String>) -> Result<(), FocusError> {
        self.ensure_not_running("Cannot change the category while the timer is running")?;
        self.category = Some(category.into());
        Ok(())
    }

    /// Set the duration to a preset number of minutes.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while the timer is running or if
    /// the preset is out of range.
    pub fn select_preset(&mut self, minutes: u32) -> Result<(), FocusError> {
        self.ensure_not_running("Cannot change the duration while the timer is running")?;

        let seconds = minutes.saturating_mul(60);
        if seconds == 0 || seconds > MAX_DURATION_SECS {
            return Err(FocusError::invalid(format!(
                "Preset must be between 1 and {} minutes",
                MAX_DURATION_SECS / 60
            )));
        }

        self.set_duration(seconds);
        Ok(())
    }

    /// Move the duration by `delta_minutes`, measured from the time remaining.
    ///
    /// The result never drops below one minute.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while the timer is running.
    pub fn adjust(&mut self, delta_minutes: i32) -> Result<(), FocusError> {
        self.ensure_not_running("Cannot change the duration while the timer is running")?;

        let target = i64::from(self.remaining_seconds) + i64::from(delta_minutes) * 60;
        let clamped = target.clamp(i64::from(MIN_DURATION_SECS), i64::from(MAX_DURATION_SECS));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.set_duration(clamped as u32);
        Ok(())
    }

    /// Start or resume the countdown.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` if no category is selected, the
    /// timer is already running, or a completed session was not acknowledged.
    pub fn start(&mut self) -> Result<(), FocusError> {
        match self.phase {
            TimerPhase::Running => Err(FocusError::invalid("The timer is already running")),
            TimerPhase::Completed => Err(FocusError::invalid(
                "Session finished; acknowledge it before starting another",
            )),
            TimerPhase::Idle | TimerPhase::Paused => {
                if self.category.is_none() {
                    return Err(FocusError::invalid("Select a category to start"));
                }
                self.phase = TimerPhase::Running;
                Ok(())
            }
        }
    }

    /// Pause the countdown at the user's request.
    ///
    /// Returns true if the timer was running.
    pub fn pause(&mut self) -> bool {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
            true
        } else {
            false
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Completed;
            TickOutcome::Completed(Completion {
                duration: self.initial_seconds,
                category: self.category.clone(),
                distractions: self.distractions,
            })
        } else {
            TickOutcome::Counting(self.remaining_seconds)
        }
    }

    /// The host lost focus.
    ///
    /// Pauses and counts a distraction if the timer was running; otherwise
    /// nothing changes. Returns true if a distraction was recorded.
    pub fn backgrounded(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }

        self.phase = TimerPhase::Paused;
        self.distractions += 1;
        true
    }

    /// Return to idle with the full duration and no distractions.
    ///
    /// The selected category is kept.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.initial_seconds;
        self.distractions = 0;
        self.phase = TimerPhase::Idle;
    }

    /// Acknowledge a completed session. Returns false if none was pending.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase == TimerPhase::Completed {
            self.reset();
            true
        } else {
            false
        }
    }

    fn set_duration(&mut self, seconds: u32) {
        self.initial_seconds = seconds;
        self.remaining_seconds = seconds;
        if self.phase == TimerPhase::Completed {
            self.distractions = 0;
        }
        self.phase = TimerPhase::Idle;
    }

    fn ensure_not_running(&self, msg: &str) -> Result<(), FocusError> {
        if self.phase == TimerPhase::Running {
            Err(FocusError::invalid(msg))
        } else {
            Ok(())
        }
    }

    /// Selected duration in seconds.
    #[must_use]
    pub const fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    /// Seconds left on the clock.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Distractions so far in this session.
    #[must_use]
    pub const fn distractions(&self) -> u32 {
        self.distractions
    }

    /// Selected category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.initial_seconds == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(self.initial_seconds))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(u64::from(self.remaining_seconds))
    }
}

/// Format seconds as MM:SS; minutes are not wrapped into hours.
#[must_use]
pub fn format_mmss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format whole minutes as a human-readable string.
#[must_use]
pub fn format_minutes(total_minutes: u64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}
