//! Report screen state.

use chrono::NaiveDate;

use super::summary::ReportSummary;
use crate::features::focus::SessionStore;
use crate::storage::KeyValueStore;

/// Holds the most recent report for display.
///
/// Nothing is cached between activations: every [`activate`](Self::activate)
/// re-reads the store, so sessions completed on the timer screen show up as
/// soon as the report is shown again.
#[derive(Debug, Clone)]
pub struct ReportScreen {
    palette: Vec<String>,
    summary: Option<ReportSummary>,
}

impl ReportScreen {
    /// Create an empty screen using `palette` for category colors.
    #[must_use]
    pub const fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            summary: None,
        }
    }

    /// Reload the report. Call on tab focus and on manual refresh.
    pub fn activate<S: KeyValueStore>(
        &mut self,
        store: &SessionStore<S>,
        today: NaiveDate,
    ) -> &ReportSummary {
        self.summary
            .insert(ReportSummary::load(store, today, &self.palette))
    }

    /// The last loaded report, if the screen has been activated.
    #[must_use]
    pub const fn summary(&self) -> Option<&ReportSummary> {
        self.summary.as_ref()
    }
}
