use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::SessionStore;
use crate::features::report::ReportSummary;
use crate::output::format_report;
use crate::storage::KeyValueStore;

/// Execute report command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn report<S: KeyValueStore>(
    store: &SessionStore<S>,
    today: NaiveDate,
    palette: &[String],
    format: OutputFormat,
) -> Result<String, FocusError> {
    let summary = ReportSummary::load(store, today, palette);
    format_report(&summary, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::NewSession;
    use crate::storage::Database;

    #[test]
    fn test_report_json_reflects_store() {
        let store = SessionStore::new(Database::open_in_memory().unwrap());
        let today = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap();
        store.append(NewSession::new(today, 1500, "A", 0)).unwrap();
        store.append(NewSession::new(today, 600, "B", 2)).unwrap();

        let output = report(&store, today, &[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["todayMinutes"], 35);
        assert_eq!(value["totalMinutes"], 35);
        assert_eq!(value["totalDistractions"], 2);
        assert_eq!(value["categories"][0]["label"], "A");
        assert_eq!(value["categories"][1]["value"], 1);
    }
}
