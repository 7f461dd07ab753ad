//! Foreground/background signals from the host.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use super::ticker::TimerEvent;

/// Host application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// The user is looking at the app
    Foreground,
    /// The app lost focus (another window, lock screen, terminal unfocused)
    Background,
}

/// Subscription through which the host reports lifecycle changes.
///
/// Dropping the sender unsubscribes. Notifications after the controller is
/// gone are silently discarded.
#[derive(Debug, Clone)]
pub struct LifecycleSender {
    events: UnboundedSender<TimerEvent>,
}

impl LifecycleSender {
    pub(crate) const fn new(events: UnboundedSender<TimerEvent>) -> Self {
        Self { events }
    }

    /// Report a lifecycle change.
    pub fn notify(&self, state: Lifecycle) {
        if self.events.send(TimerEvent::Lifecycle(state)).is_err() {
            log::debug!("lifecycle {state:?} dropped: controller is gone");
        }
    }

    /// Report that the host moved to the background.
    pub fn backgrounded(&self) {
        self.notify(Lifecycle::Background);
    }

    /// Report that the host returned to the foreground.
    pub fn foregrounded(&self) {
        self.notify(Lifecycle::Foreground);
    }
}
