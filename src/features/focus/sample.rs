//! Sample data for trying out the report screen.

use chrono::{Duration, NaiveDate};

use super::session::{NewSession, SessionRecord};
use super::storage::SessionStore;
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Sessions spread over today and yesterday.
#[must_use]
pub fn sample_sessions(today: NaiveDate) -> Vec<SessionRecord> {
    let yesterday = today - Duration::days(1);

    [
        ("1", today, 45, "Coding", 0),
        ("2", today, 25, "Study", 2),
        ("3", yesterday, 60, "Reading", 0),
        ("4", yesterday, 30, "Coding", 1),
        ("5", yesterday, 15, "Exercise", 0),
    ]
    .into_iter()
    .map(|(id, date, minutes, category, distractions)| {
        NewSession::new(date, minutes * 60, category, distractions).into_record(id.to_string())
    })
    .collect()
}

/// Replace the stored sessions with [`sample_sessions`].
///
/// # Errors
///
/// Returns an error if the collection cannot be written.
pub fn seed<S: KeyValueStore>(
    store: &SessionStore<S>,
    today: NaiveDate,
) -> Result<Vec<SessionRecord>, FocusError> {
    let sessions = sample_sessions(today);
    store.replace_all(&sessions)?;
    log::info!("seeded {} sample sessions", sessions.len());
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_seed_replaces_existing() {
        let store = SessionStore::new(Database::open_in_memory().unwrap());
        let today = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap();

        store
            .append(NewSession::new(today, 60, "Study", 0))
            .unwrap();

        let seeded = seed(&store, today).unwrap();
        assert_eq!(seeded.len(), 5);
        assert_eq!(store.read_all(), seeded);

        let today_count = seeded.iter().filter(|s| s.date == today).count();
        assert_eq!(today_count, 2);
    }
}
