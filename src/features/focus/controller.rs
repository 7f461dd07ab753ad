//! Timer controller.
//!
//! Owns the countdown, the ticker driving it, and the session store it
//! appends to. Hosts call the user-action methods directly and feed timer
//! events back through [`TimerController::pump`] or
//! [`TimerController::next_notice`].

use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::haptics::{Haptics, Pulse};
use super::lifecycle::{Lifecycle, LifecycleSender};
use super::session::NewSession;
use super::storage::SessionStore;
use super::ticker::{TickHandle, TimerEvent};
use super::timer::{Completion, FocusTimer, TickOutcome};
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Summary of a finished session, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Category the session was filed under
    pub category: String,
    /// Whole minutes focused
    pub minutes: u32,
    /// Distractions during the session
    pub distractions: u32,
}

/// Something the host should show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Focus was lost and the timer paused
    Interrupted {
        /// Distractions so far this session
        distractions: u32,
    },
    /// A categorized session finished and was recorded
    Completed(SessionSummary),
    /// Time ran out on a session with no category; nothing was recorded
    TimeUp,
}

impl Notice {
    /// Title and body for display.
    #[must_use]
    pub fn message(&self) -> (String, String) {
        match self {
            Self::Interrupted { distractions } => (
                "Focus lost".to_string(),
                format!("You left the app, so the timer was paused. Distractions: {distractions}"),
            ),
            Self::Completed(summary) => (
                "Session complete".to_string(),
                format!(
                    "Goal reached!\nCategory: {}\nDuration: {} minutes\nDistractions: {}",
                    summary.category, summary.minutes, summary.distractions
                ),
            ),
            Self::TimeUp => ("Time's up".to_string(), "The timer finished.".to_string()),
        }
    }
}

/// Drives a [`FocusTimer`] from ticks and lifecycle signals.
pub struct TimerController<S, H> {
    timer: FocusTimer,
    store: SessionStore<S>,
    haptics: H,
    runtime: Handle,
    tick_period: Duration,
    ticker: Option<TickHandle>,
    generation: u64,
    foreground: bool,
    events_tx: UnboundedSender<TimerEvent>,
    events_rx: UnboundedReceiver<TimerEvent>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<S: KeyValueStore, H: Haptics> TimerController<S, H> {
    /// Create a controller. Tickers are spawned on `runtime`.
    pub fn new(
        timer: FocusTimer,
        store: SessionStore<S>,
        haptics: H,
        runtime: Handle,
        tick_period: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            timer,
            store,
            haptics,
            runtime,
            tick_period,
            ticker: None,
            generation: 0,
            foreground: true,
            events_tx,
            events_rx,
            today: local_today,
        }
    }

    /// Use a fixed source for the completion date.
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Subscribe the host's lifecycle notifications.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleSender {
        LifecycleSender::new(self.events_tx.clone())
    }

    /// Select the session category.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while running.
    pub fn select_category(&mut self, category: &str) -> Result<(), FocusError> {
        self.timer.select_category(category)?;
        self.haptics.pulse(Pulse::Tap);
        Ok(())
    }

    /// Select a preset duration.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while running or for a bad preset.
    pub fn select_preset(&mut self, minutes: u32) -> Result<(), FocusError> {
        self.timer.select_preset(minutes)?;
        self.haptics.pulse(Pulse::Tap);
        Ok(())
    }

    /// Nudge the duration by whole minutes.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` while running.
    pub fn adjust(&mut self, delta_minutes: i32) -> Result<(), FocusError> {
        self.timer.adjust(delta_minutes)?;
        self.haptics.pulse(Pulse::Tap);
        Ok(())
    }

    /// Start or resume the countdown.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` when in the background, without a
    /// category, or when already running.
    pub fn start(&mut self) -> Result<(), FocusError> {
        if !self.foreground {
            return Err(FocusError::invalid("Return to the app to start the timer"));
        }

        self.timer.start()?;
        self.spawn_ticker();
        self.haptics.pulse(Pulse::Press);
        log::debug!(
            "timer started: {}s left, category {:?}",
            self.timer.remaining_seconds(),
            self.timer.category()
        );
        Ok(())
    }

    /// Pause at the user's request. No distraction is counted.
    pub fn pause(&mut self) -> bool {
        if !self.timer.pause() {
            return false;
        }

        self.stop_ticker();
        self.haptics.pulse(Pulse::Press);
        log::debug!("timer paused: {}s left", self.timer.remaining_seconds());
        true
    }

    /// Start when stopped, pause when running.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidAction` if starting is not allowed.
    pub fn toggle(&mut self) -> Result<(), FocusError> {
        if self.timer.is_running() {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Stop and return to idle; the category is kept.
    pub fn reset(&mut self) {
        self.stop_ticker();
        self.timer.reset();
        self.haptics.pulse(Pulse::Press);
        log::debug!("timer reset");
    }

    /// Dismiss a completion notice and get ready for the next session.
    pub fn acknowledge(&mut self) -> bool {
        self.timer.acknowledge()
    }

    /// Advance the countdown by one second.
    ///
    /// On reaching zero the ticker stops and, when a category is set, the
    /// session is appended to the store. A failed append is logged and the
    /// timer still completes.
    pub fn tick(&mut self) -> Option<Notice> {
        match self.timer.tick() {
            TickOutcome::Ignored | TickOutcome::Counting(_) => None,
            TickOutcome::Completed(done) => {
                self.stop_ticker();
                self.haptics.pulse(Pulse::Long);
                Some(self.finish(done))
            }
        }
    }

    /// The host moved to the background.
    ///
    /// A running session pauses and counts a distraction; otherwise nothing
    /// changes besides remembering that the host is in the background.
    pub fn backgrounded(&mut self) -> Option<Notice> {
        self.foreground = false;

        if !self.timer.backgrounded() {
            return None;
        }

        self.stop_ticker();
        self.haptics.pulse(Pulse::Alert);
        let distractions = self.timer.distractions();
        log::info!("focus lost, timer paused ({distractions} distractions)");
        Some(Notice::Interrupted { distractions })
    }

    /// The host returned to the foreground.
    pub fn foregrounded(&mut self) {
        self.foreground = true;
    }

    /// Apply one timer event.
    pub fn handle(&mut self, event: TimerEvent) -> Option<Notice> {
        match event {
            TimerEvent::Tick { generation } => {
                let current = self.ticker.as_ref().map(TickHandle::generation);
                if current == Some(generation) {
                    self.tick()
                } else {
                    log::trace!("dropping stale tick from ticker {generation}");
                    None
                }
            }
            TimerEvent::Lifecycle(Lifecycle::Background) => self.backgrounded(),
            TimerEvent::Lifecycle(Lifecycle::Foreground) => {
                self.foregrounded();
                None
            }
        }
    }

    /// Apply every pending event without waiting.
    pub fn pump(&mut self) -> Vec<Notice> {
        let mut batch = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            batch.push(event);
        }
        self.apply_batch(batch)
    }

    /// Wait for events until one of them produces a notice.
    pub async fn next_notice(&mut self) -> Option<Notice> {
        loop {
            let first = self.events_rx.recv().await?;
            let mut batch = vec![first];
            while let Ok(event) = self.events_rx.try_recv() {
                batch.push(event);
            }

            let mut notices = self.apply_batch(batch);
            if !notices.is_empty() {
                return Some(notices.remove(0));
            }
        }
    }

    /// Lifecycle events are applied before ticks from the same batch, so a
    /// background signal supersedes ticks that were already queued.
    fn apply_batch(&mut self, batch: Vec<TimerEvent>) -> Vec<Notice> {
        let (lifecycle, ticks): (Vec<_>, Vec<_>) = batch
            .into_iter()
            .partition(|event| matches!(event, TimerEvent::Lifecycle(_)));

        lifecycle
            .into_iter()
            .chain(ticks)
            .filter_map(|event| self.handle(event))
            .collect()
    }

    fn finish(&mut self, done: Completion) -> Notice {
        let Some(category) = done.category else {
            log::info!("timer finished without a category; nothing recorded");
            return Notice::TimeUp;
        };

        let session = NewSession::new(
            (self.today)(),
            u64::from(done.duration),
            category.clone(),
            done.distractions,
        );
        if let Err(e) = self.store.append(session) {
            log::error!("failed to save session: {e}");
        }

        Notice::Completed(SessionSummary {
            category,
            minutes: done.duration / 60,
            distractions: done.distractions,
        })
    }

    fn spawn_ticker(&mut self) {
        self.stop_ticker();
        self.generation += 1;
        self.ticker = Some(TickHandle::spawn(
            &self.runtime,
            self.tick_period,
            self.generation,
            self.events_tx.clone(),
        ));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// The countdown state.
    pub const fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    /// The session store completions are appended to.
    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Whether a ticker is currently scheduled.
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether the host is in the foreground.
    pub const fn is_foreground(&self) -> bool {
        self.foreground
    }
}
