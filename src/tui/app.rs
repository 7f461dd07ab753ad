//! Application state for the TUI.

use std::fmt;

use chrono::{Local, NaiveDate};
use tokio::runtime::Handle;

use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{
    sample, FocusTimer, Haptics, LifecycleSender, Notice, SessionStore, TimerController,
};
use crate::features::report::{ReportScreen, ReportSummary};
use crate::storage::Database;

const HELP: &str =
    "c/C:category | p:preset | +/-:1m | ]/[:5m | space:start/pause | r:reset | Tab:report | q:quit";
const REPORT_HELP: &str = "r:refresh | s:sample data | x:clear all | Tab:timer | q:quit";

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Timer,
    Report,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Timer, Self::Report];

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Timer => 0,
            Self::Report => 1,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timer => write!(f, "Timer"),
            Self::Report => write!(f, "Report"),
        }
    }
}

type Controller<'a> = TimerController<&'a Database, Box<dyn Haptics + Send>>;

/// Application state.
pub struct App<'a> {
    controller: Controller<'a>,
    lifecycle: LifecycleSender,
    report: ReportScreen,
    categories: &'a [String],
    presets: &'a [u32],
    preset_index: Option<usize>,
    today: fn() -> NaiveDate,
    /// Current screen.
    pub tab: Tab,
    /// Status message to display.
    pub status: Option<String>,
    /// Notice waiting to be dismissed.
    pub notice: Option<Notice>,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<'a> App<'a> {
    /// Create a new app instance. Tickers are spawned on `runtime`.
    pub fn new(
        config: &'a Config,
        db: &'a Database,
        runtime: Handle,
        haptics: Box<dyn Haptics + Send>,
    ) -> Self {
        let timer_config = &config.timer;
        let controller = TimerController::new(
            FocusTimer::from_minutes(timer_config.default_minutes),
            SessionStore::new(db),
            haptics,
            runtime,
            timer_config.tick_period(),
        );
        let lifecycle = controller.lifecycle();

        Self {
            controller,
            lifecycle,
            report: ReportScreen::new(config.report.palette.clone()),
            categories: &timer_config.categories,
            presets: &timer_config.presets,
            preset_index: timer_config
                .presets
                .iter()
                .position(|&m| m == timer_config.default_minutes),
            today: local_today,
            tab: Tab::Timer,
            status: Some("Pick a category with c, then press space".to_string()),
            notice: None,
        }
    }

    /// Use a fixed date for completions and reports.
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self.controller = self.controller.with_clock(today);
        self
    }

    /// The countdown state.
    pub const fn timer(&self) -> &FocusTimer {
        self.controller.timer()
    }

    /// Categories offered on the timer screen.
    pub const fn categories(&self) -> &[String] {
        self.categories
    }

    /// The last loaded report.
    pub const fn report(&self) -> Option<&ReportSummary> {
        self.report.summary()
    }

    /// Whether the terminal currently has focus.
    pub const fn is_foreground(&self) -> bool {
        self.controller.is_foreground()
    }

    /// Key hints for the current screen.
    pub const fn help(&self) -> &'static str {
        match self.tab {
            Tab::Timer => HELP,
            Tab::Report => REPORT_HELP,
        }
    }

    /// Switch between the timer and the report.
    pub fn next_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Timer => Tab::Report,
            Tab::Report => Tab::Timer,
        };
        self.status = None;

        if self.tab == Tab::Report {
            self.activate_report();
        }
    }

    /// Re-read the store into the report.
    pub fn activate_report(&mut self) {
        let today = (self.today)();
        let count = self
            .report
            .activate(self.controller.store(), today)
            .session_count;
        log::debug!("report refreshed: {count} sessions");
    }

    /// Select the next (or previous) configured category.
    pub fn cycle_category(&mut self, forward: bool) {
        if self.categories.is_empty() {
            return;
        }

        let len = self.categories.len();
        let current = self
            .timer()
            .category()
            .and_then(|c| self.categories.iter().position(|k| k == c));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        let category = self.categories[next].clone();
        let result = self.controller.select_category(&category);
        self.apply(result, || format!("Category: {category}"));
    }

    /// Select the next configured preset.
    pub fn cycle_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }

        let next = self.preset_index.map_or(0, |i| (i + 1) % self.presets.len());
        let minutes = self.presets[next];
        let result = self.controller.select_preset(minutes);
        if result.is_ok() {
            self.preset_index = Some(next);
        }
        self.apply(result, || format!("Duration: {minutes} min"));
    }

    /// Nudge the duration.
    pub fn adjust(&mut self, delta_minutes: i32) {
        let result = self.controller.adjust(delta_minutes);
        if result.is_ok() {
            self.preset_index = None;
        }
        let remaining = self.timer().format_remaining();
        self.apply(result, || format!("Duration: {remaining}"));
    }

    /// Start or pause.
    pub fn toggle(&mut self) {
        let result = self.controller.toggle();
        let running = self.timer().is_running();
        self.apply(result, || {
            let label = if running { "Focus!" } else { "Paused" };
            label.to_string()
        });
    }

    /// Stop and restore the selected duration.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = Some("Reset".to_string());
    }

    /// Dismiss the current notice.
    pub fn dismiss_notice(&mut self) {
        if let Some(notice) = self.notice.take() {
            if matches!(notice, Notice::Completed(_) | Notice::TimeUp) {
                self.controller.acknowledge();
            }
        }
    }

    /// Replace the store with sample sessions.
    pub fn seed(&mut self) {
        match sample::seed(self.controller.store(), (self.today)()) {
            Ok(sessions) => {
                self.status = Some(format!("Loaded {} sample sessions", sessions.len()));
            }
            Err(e) => self.report_error(&e),
        }
        self.activate_report();
    }

    /// Delete every stored session.
    pub fn clear(&mut self) {
        match self.controller.store().clear() {
            Ok(()) => self.status = Some("All sessions deleted".to_string()),
            Err(e) => self.report_error(&e),
        }
        self.activate_report();
    }

    /// The terminal window gained focus.
    pub fn focus_gained(&self) {
        self.lifecycle.foregrounded();
    }

    /// The terminal window lost focus.
    pub fn focus_lost(&self) {
        self.lifecycle.backgrounded();
    }

    /// Apply pending ticks and lifecycle changes.
    pub fn pump(&mut self) {
        let notices = self.controller.pump();
        if notices.is_empty() {
            return;
        }

        if self.tab == Tab::Report
            && notices.iter().any(|n| matches!(n, Notice::Completed(_)))
        {
            self.activate_report();
        }

        // Ticks are cancelled once a notice fires, so at most one matters.
        self.notice = notices.into_iter().last();
    }

    fn apply(&mut self, result: Result<(), FocusError>, ok: impl FnOnce() -> String) {
        match result {
            Ok(()) => self.status = Some(ok()),
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, e: &FocusError) {
        if !e.is_user_action() {
            log::error!("{e}");
        }
        self.status = Some(e.to_string());
    }
}
