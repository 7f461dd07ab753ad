//! Focus session storage.
//!
//! All records live in one JSON array under [`SESSIONS_KEY`]. Appends are
//! read-modify-write; there is a single writer, so no locking is needed.

use serde_json::Value;

use super::session::{NewSession, SessionRecord};
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Key the session collection is stored under.
pub const SESSIONS_KEY: &str = "@focus_sessions";

/// Storage for completed focus sessions.
pub struct SessionStore<S> {
    kv: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a session store on top of a key-value store.
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Borrow the underlying key-value store.
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Append a completed session, generating an id if none was supplied.
    ///
    /// Existing entries are carried over verbatim, including ones this version
    /// cannot parse. Refuses to write when the stored value is not a JSON
    /// array at all, so a corrupt value is never replaced by a one-element list.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read, parsed, or written.
    pub fn append(&self, session: NewSession) -> Result<SessionRecord, FocusError> {
        let mut entries = self.load_strict()?;

        let id = session
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let record = session.into_record(id);
        entries.push(serde_json::to_value(&record)?);

        self.kv.set(SESSIONS_KEY, &serde_json::to_string(&entries)?)?;
        log::info!(
            "saved session {} ({}s, {}, {} distractions)",
            record.id,
            record.duration,
            record.category_label(),
            record.distractions
        );
        Ok(record)
    }

    /// Read every stored record.
    ///
    /// Never fails: an unreadable or malformed collection is logged and
    /// treated as empty, and malformed entries are skipped.
    pub fn read_all(&self) -> Vec<SessionRecord> {
        let raw = match self.kv.get(SESSIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("failed to read sessions: {e}");
                return Vec::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("stored sessions are malformed, treating as empty: {e}");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping malformed session at index {i}: {e}");
                    None
                }
            })
            .collect()
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn replace_all(&self, records: &[SessionRecord]) -> Result<(), FocusError> {
        self.write(records)
    }

    /// Delete every stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed.
    pub fn clear(&self) -> Result<(), FocusError> {
        self.kv.remove(SESSIONS_KEY)?;
        log::info!("cleared all sessions");
        Ok(())
    }

    fn load_strict(&self) -> Result<Vec<Value>, FocusError> {
        match self.kv.get(SESSIONS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                FocusError::Parse(format!("Stored sessions are malformed: {e}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, records: &[SessionRecord]) -> Result<(), FocusError> {
        let json = serde_json::to_string(records)?;
        self.kv.set(SESSIONS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, MockKeyValueStore};
    use chrono::NaiveDate;

    fn create_test_store() -> SessionStore<Database> {
        SessionStore::new(Database::open_in_memory().unwrap())
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let store = create_test_store();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_append_and_read() {
        let store = create_test_store();

        let first = store
            .append(NewSession::new(date("2025-12-08"), 1500, "Coding", 0))
            .unwrap();
        let second = store
            .append(NewSession::new(date("2025-12-08"), 600, "Study", 2))
            .unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let all = store.read_all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }

    #[test]
    fn test_append_keeps_supplied_id() {
        let store = create_test_store();
        let record = store
            .append(NewSession::new(date("2025-12-08"), 60, "Reading", 0).with_id("42"))
            .unwrap();
        assert_eq!(record.id, "42");
    }

    #[test]
    fn test_clear_then_append() {
        let store = create_test_store();
        store
            .append(NewSession::new(date("2025-12-08"), 60, "Reading", 0))
            .unwrap();

        store.clear().unwrap();
        assert!(store.read_all().is_empty());

        store
            .append(NewSession::new(date("2025-12-09"), 120, "Study", 1))
            .unwrap();
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn test_malformed_collection_reads_empty_and_blocks_append() {
        let store = create_test_store();
        store.kv().set(SESSIONS_KEY, "{not json").unwrap();

        assert!(store.read_all().is_empty());

        let result = store.append(NewSession::new(date("2025-12-08"), 60, "Study", 0));
        assert!(matches!(result, Err(FocusError::Parse(_))));

        // Corrupt value left untouched
        assert_eq!(
            store.kv().get(SESSIONS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let store = create_test_store();
        store
            .kv()
            .set(
                SESSIONS_KEY,
                r#"[
                    {"id":"1","date":"2025-12-08","duration":600,"category":"Study","distractions":1},
                    {"id":"2","date":"yesterday","duration":600,"category":"Study"},
                    {"id":"3","date":"2025-12-07","duration":300,"category":"Coding"}
                ]"#,
            )
            .unwrap();

        let ids: Vec<String> = store.read_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_integer_ids_and_null_distractions_are_read() {
        let store = create_test_store();
        store
            .kv()
            .set(
                SESSIONS_KEY,
                r#"[
                    {"id":1733650000000,"date":"2025-12-08","duration":1500,"category":"Coding","distractions":0},
                    {"id":"2","date":"2025-12-08","duration":600,"category":"Study","distractions":null}
                ]"#,
            )
            .unwrap();

        let all = store.read_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "1733650000000");
        assert_eq!(all[1].id, "2");
        assert_eq!(all[1].distractions, 0);

        // Append keeps both and adds a third
        store
            .append(NewSession::new(date("2025-12-08"), 60, "Reading", 1))
            .unwrap();
        assert_eq!(store.read_all().len(), 3);
    }

    #[test]
    fn test_append_preserves_unparseable_entries() {
        let store = create_test_store();
        store
            .kv()
            .set(SESSIONS_KEY, r#"[{"id":"old","date":"someday","duration":60}]"#)
            .unwrap();

        store
            .append(NewSession::new(date("2025-12-08"), 60, "Study", 0))
            .unwrap();

        let raw = store.kv().get(SESSIONS_KEY).unwrap().unwrap();
        let entries: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["date"], "someday");
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn test_read_failure_reads_empty() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .returning(|_| Err(FocusError::Database("disk gone".to_string())));

        let store = SessionStore::new(kv);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set()
            .times(1)
            .returning(|_, _| Err(FocusError::Database("read-only".to_string())));

        let store = SessionStore::new(kv);
        let result = store.append(NewSession::new(date("2025-12-08"), 60, "Study", 0));
        assert!(matches!(result, Err(FocusError::Database(_))));
    }

    #[test]
    fn test_replace_all() {
        let store = create_test_store();
        store
            .append(NewSession::new(date("2025-12-08"), 60, "Study", 0))
            .unwrap();

        let replacement = vec![
            NewSession::new(date("2025-12-01"), 900, "Reading", 0).into_record("a".to_string()),
        ];
        store.replace_all(&replacement).unwrap();

        assert_eq!(store.read_all(), replacement);
    }
}
