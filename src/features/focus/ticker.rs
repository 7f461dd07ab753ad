//! Repeating tick scheduler for the countdown.
//!
//! A [`TickHandle`] owns one spawned task that sends a [`TimerEvent::Tick`]
//! every period. Cancelling or dropping the handle stops the task; the task
//! drops its sender when it exits, so no tick is delivered after that.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::lifecycle::Lifecycle;

/// Events delivered to the timer controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One period elapsed for the ticker with this generation
    Tick {
        /// Generation of the ticker that produced the tick
        generation: u64,
    },
    /// The host moved between foreground and background
    Lifecycle(Lifecycle),
}

/// Handle to a running ticker task.
#[derive(Debug)]
pub struct TickHandle {
    generation: u64,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl TickHandle {
    /// Spawn a ticker on `runtime` that fires every `period`.
    ///
    /// The first tick arrives one full period after spawning.
    #[must_use]
    pub fn spawn(
        runtime: &Handle,
        period: Duration,
        generation: u64,
        events: UnboundedSender<TimerEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        if events.send(TimerEvent::Tick { generation }).is_err() {
                            break;
                        }
                    }
                }
            }
            log::trace!("ticker {generation} stopped");
        });

        log::debug!("ticker {generation} started ({period:?})");
        Self {
            generation,
            cancel,
            task,
        }
    }

    /// Generation number this ticker stamps on its ticks.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the ticker.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the ticker task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
