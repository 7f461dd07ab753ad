//! Completed focus session records.
//!
//! A record is written once when a countdown runs out and never changes
//! afterwards. Records are stored as a JSON array of
//! `{id, date, duration, category, distractions}` objects.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Label used for records that were stored without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A completed focus session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier assigned on append; stored as a string or an integer
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Local calendar date the session completed on (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Planned duration in seconds
    pub duration: u64,
    /// Category label; older or hand-edited data may lack one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Number of times focus was lost during the session; `null` reads as 0
    #[serde(default, deserialize_with = "deserialize_distractions")]
    pub distractions: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Unsigned(id) => id.to_string(),
        RawId::Signed(id) => id.to_string(),
    })
}

fn deserialize_distractions<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SessionRecord {
    /// Whole minutes of focus time, rounded down.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.duration / 60
    }

    /// Category label for display.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// A session about to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    /// Caller-supplied id; the store generates one when `None`
    pub id: Option<String>,
    /// Local completion date
    pub date: NaiveDate,
    /// Planned duration in seconds
    pub duration: u64,
    /// Category label
    pub category: Option<String>,
    /// Distraction count at completion
    pub distractions: u32,
}

impl NewSession {
    /// Create a new session without an id.
    #[must_use]
    pub fn new(date: NaiveDate, duration: u64, category: impl Into<String>, distractions: u32) -> Self {
        Self {
            id: None,
            date,
            duration,
            category: Some(category.into()),
            distractions,
        }
    }

    /// Attach an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Turn into a stored record using `id`.
    #[must_use]
    pub fn into_record(self, id: String) -> SessionRecord {
        SessionRecord {
            id,
            date: self.date,
            duration: self.duration,
            category: self.category,
            distractions: self.distractions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_json_shape() {
        let record = NewSession::new(date("2025-12-08"), 1500, "Coding", 2).into_record("abc".to_string());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["date"], "2025-12-08");
        assert_eq!(json["duration"], 1500);
        assert_eq!(json["category"], "Coding");
        assert_eq!(json["distractions"], 2);
    }

    #[test]
    fn test_missing_distractions_defaults_to_zero() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"id":"1","date":"2025-12-08","duration":900,"category":"Study"}"#,
        )
        .unwrap();

        assert_eq!(record.distractions, 0);
        assert_eq!(record.minutes(), 15);
    }

    #[test]
    fn test_missing_category_is_uncategorized() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"id":"1","date":"2025-12-08","duration":59}"#).unwrap();

        assert_eq!(record.category, None);
        assert_eq!(record.category_label(), UNCATEGORIZED);
        assert_eq!(record.minutes(), 0);
    }

    #[test]
    fn test_integer_id_reads_as_string() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"id":1733650000000,"date":"2025-12-08","duration":60,"distractions":0}"#,
        )
        .unwrap();
        assert_eq!(record.id, "1733650000000");

        let record: SessionRecord =
            serde_json::from_str(r#"{"id":-7,"date":"2025-12-08","duration":60}"#).unwrap();
        assert_eq!(record.id, "-7");

        // Written back as a string
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "-7");
    }

    #[test]
    fn test_null_distractions_reads_as_zero() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"id":"2","date":"2025-12-08","duration":60,"distractions":null}"#,
        )
        .unwrap();
        assert_eq!(record.distractions, 0);
    }

    #[test]
    fn test_fractional_id_is_rejected() {
        let result: Result<SessionRecord, _> =
            serde_json::from_str(r#"{"id":1.5,"date":"2025-12-08","duration":60}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_id() {
        let session = NewSession::new(date("2025-01-01"), 60, "Reading", 0).with_id("fixed");
        assert_eq!(session.id.as_deref(), Some("fixed"));
    }
}
