//! Session management commands: history, seed and clear.

use chrono::NaiveDate;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::{sample, SessionRecord, SessionStore};
use crate::output::{format_sessions, to_json};
use crate::storage::KeyValueStore;

/// Execute history command
///
/// Lists sessions newest date first; sessions on the same date are listed
/// most recently stored first.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn history<S: KeyValueStore>(
    store: &SessionStore<S>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let mut sessions: Vec<SessionRecord> = store.read_all();
    sessions.reverse();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    format_sessions(&sessions, "History", format)
}

/// Execute seed command
///
/// # Errors
///
/// Returns `FocusError::InvalidAction` if sessions exist and `force` is not
/// set, or an error if the sample data cannot be written.
pub fn seed<S: KeyValueStore>(
    store: &SessionStore<S>,
    today: NaiveDate,
    force: bool,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let existing = store.read_all().len();
    if existing > 0 && !force {
        return Err(FocusError::invalid(format!(
            "{existing} sessions already stored; pass --force to replace them"
        )));
    }

    let sessions = sample::seed(store, today)?;
    format_sessions(&sessions, "Seeded", format)
}

/// Execute clear command
///
/// # Errors
///
/// Returns `FocusError::InvalidAction` without `force`, or an error if the
/// collection cannot be removed.
pub fn clear<S: KeyValueStore>(
    store: &SessionStore<S>,
    force: bool,
    format: OutputFormat,
) -> Result<String, FocusError> {
    if !force {
        return Err(FocusError::invalid(
            "Refusing to delete all sessions without --force",
        ));
    }

    let deleted = store.read_all().len();
    store.clear()?;

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": deleted })),
        OutputFormat::Pretty => Ok(format!(
            "Deleted {deleted} session{}",
            if deleted == 1 { "" } else { "s" }
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::NewSession;
    use crate::storage::Database;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()
    }

    fn store() -> SessionStore<Database> {
        SessionStore::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_history_newest_first() {
        let store = store();
        let yesterday = today().pred_opt().unwrap();
        store
            .append(NewSession::new(yesterday, 60, "Old", 0).with_id("a"))
            .unwrap();
        store
            .append(NewSession::new(today(), 60, "First", 0).with_id("b"))
            .unwrap();
        store
            .append(NewSession::new(today(), 60, "Second", 0).with_id("c"))
            .unwrap();

        let output = history(&store, None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<&str> = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap())
            .collect();

        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_history_limit() {
        let store = store();
        sample::seed(&store, today()).unwrap();

        let output = history(&store, Some(2), OutputFormat::Json).unwrap();
        assert!(output.contains("\"count\": 2"));
    }

    #[test]
    fn test_seed_requires_force_when_not_empty() {
        let store = store();
        store.append(NewSession::new(today(), 60, "Study", 0)).unwrap();

        let err = seed(&store, today(), false, OutputFormat::Pretty).unwrap_err();
        assert!(err.is_user_action());
        assert_eq!(store.read_all().len(), 1);

        seed(&store, today(), true, OutputFormat::Pretty).unwrap();
        assert_eq!(store.read_all().len(), 5);
    }

    #[test]
    fn test_seed_empty_store_without_force() {
        let store = store();
        let output = seed(&store, today(), false, OutputFormat::Json).unwrap();
        assert!(output.contains("\"count\": 5"));
    }

    #[test]
    fn test_clear_requires_force() {
        let store = store();
        sample::seed(&store, today()).unwrap();

        assert!(clear(&store, false, OutputFormat::Pretty).is_err());
        assert_eq!(store.read_all().len(), 5);

        let output = clear(&store, true, OutputFormat::Pretty).unwrap();
        assert_eq!(output, "Deleted 5 sessions");
        assert!(store.read_all().is_empty());
    }
}
