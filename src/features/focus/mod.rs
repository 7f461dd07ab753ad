//! Focus timer and session tracking.
//!
//! Provides the countdown and everything around it:
//! - Category and duration selection
//! - A cancellable one-second ticker
//! - Distraction tracking from foreground/background changes
//! - Persisting completed sessions

pub mod controller;
pub mod haptics;
pub mod lifecycle;
pub mod sample;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use controller::{Notice, SessionSummary, TimerController};
pub use haptics::{Haptics, Pulse, Silent, TerminalBell};
pub use lifecycle::{Lifecycle, LifecycleSender};
pub use session::{NewSession, SessionRecord, UNCATEGORIZED};
pub use storage::{SessionStore, SESSIONS_KEY};
pub use ticker::{TickHandle, TimerEvent};
pub use timer::{format_minutes, format_mmss, FocusTimer, TickOutcome, TimerPhase};
