//! JSON output formatting for focustrack.

use serde::Serialize;
use serde_json::json;

use crate::error::FocusError;
use crate::features::focus::SessionRecord;
use crate::features::report::ReportSummary;

/// Format a report as JSON, including the chart shapes.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_report_json(summary: &ReportSummary) -> Result<String, FocusError> {
    let output = json!({
        "today": summary.today,
        "todayMinutes": summary.today_minutes,
        "totalMinutes": summary.total_minutes,
        "totalDistractions": summary.total_distractions,
        "sessionCount": summary.session_count,
        "streakDays": summary.streak_days,
        "daily": summary.bar_series(),
        "categories": summary.category_shares(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format session records as JSON.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[SessionRecord]) -> Result<String, FocusError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::sample::sample_sessions;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()
    }

    #[test]
    fn test_format_report_json_fields() {
        let palette = vec!["#FF9F0A".to_string()];
        let summary = ReportSummary::from_records(&sample_sessions(today()), today(), &palette);
        let result = format_report_json(&summary).unwrap();

        assert!(result.contains("\"todayMinutes\": 70"));
        assert!(result.contains("\"totalMinutes\": 175"));
        assert!(result.contains("\"totalDistractions\": 3"));
        assert!(result.contains("\"streakDays\": 2"));
        assert!(result.contains("\"labels\""));
        assert!(result.contains("\"color\": \"#FF9F0A\""));
    }

    #[test]
    fn test_format_report_json_parses_back() {
        let summary = ReportSummary::from_records(&[], today(), &[]);
        let result = format_report_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["sessionCount"], 0);
        assert_eq!(value["daily"]["values"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["categories"], json!([]));
    }

    #[test]
    fn test_format_sessions_json_empty_list() {
        let result = format_sessions_json(&[]).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_sessions_json_uses_stored_shape() {
        let result = format_sessions_json(&sample_sessions(today())).unwrap();

        assert!(result.contains("\"count\": 5"));
        assert!(result.contains("\"date\": \"2025-12-08\""));
        assert!(result.contains("\"duration\": 2700"));
        assert!(result.contains("\"category\": \"Coding\""));
    }

    #[test]
    fn test_json_preserves_special_characters() {
        let mut session = sample_sessions(today()).remove(0);
        session.category = Some("Deep \"work\"\n".to_string());
        let result = to_json(&session).unwrap();

        assert!(result.contains("\\\"work\\\""));
        assert!(result.contains("\\n"));
    }
}
