//! Focus report aggregation.
//!
//! Produces report figures from the stored sessions in a single pass. The
//! aggregation is a pure function of the records, today's date, and the
//! palette; callers re-run it whenever the report is shown.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::features::focus::{SessionRecord, SessionStore, UNCATEGORIZED};
use crate::storage::KeyValueStore;

/// Number of days in the daily chart, today included.
pub const WINDOW_DAYS: usize = 7;

/// Focus minutes on one day of the chart window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMinutes {
    /// Calendar date
    pub date: NaiveDate,
    /// Two-digit day of month, used as the chart label
    pub label: String,
    /// Whole minutes, summed per session
    pub minutes: u64,
}

/// Session count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category key; `None` for records stored without one
    pub category: Option<String>,
    /// Number of sessions
    pub sessions: u64,
    /// Display color (`#RRGGBB`) by first-occurrence order
    pub color: String,
}

impl CategoryCount {
    /// Category label for display.
    #[must_use]
    pub fn label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Report figures derived from every stored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Date the report was computed for
    pub today: NaiveDate,
    /// Focus minutes completed today
    pub today_minutes: u64,
    /// Focus minutes across all sessions
    pub total_minutes: u64,
    /// Distractions across all sessions
    pub total_distractions: u64,
    /// Number of stored sessions
    pub session_count: u64,
    /// Consecutive days with a session, ending today or yesterday
    pub streak_days: u64,
    /// Last seven days, oldest first
    pub daily: Vec<DailyMinutes>,
    /// Sessions per category, in order of first occurrence
    pub categories: Vec<CategoryCount>,
}

impl ReportSummary {
    /// Aggregate `records` as seen on `today`.
    ///
    /// Colors are taken from `palette` cyclically; an empty palette leaves
    /// them blank.
    #[must_use]
    pub fn from_records(records: &[SessionRecord], today: NaiveDate, palette: &[String]) -> Self {
        let window_start = today - Duration::days(WINDOW_DAYS as i64 - 1);
        let mut daily: Vec<DailyMinutes> = (0..WINDOW_DAYS)
            .map(|offset| {
                let date = window_start + Duration::days(offset as i64);
                DailyMinutes {
                    date,
                    label: date.format("%d").to_string(),
                    minutes: 0,
                }
            })
            .collect();

        let mut today_seconds: u64 = 0;
        let mut total_seconds: u64 = 0;
        let mut total_distractions: u64 = 0;
        let mut category_index: HashMap<Option<&str>, usize> = HashMap::new();
        let mut categories: Vec<CategoryCount> = Vec::new();
        let mut active_days: HashSet<NaiveDate> = HashSet::new();

        for record in records {
            total_seconds = total_seconds.saturating_add(record.duration);
            total_distractions =
                total_distractions.saturating_add(u64::from(record.distractions));
            active_days.insert(record.date);

            if record.date == today {
                today_seconds = today_seconds.saturating_add(record.duration);
            }

            if record.date >= window_start && record.date <= today {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let slot = (record.date - window_start).num_days() as usize;
                daily[slot].minutes = daily[slot].minutes.saturating_add(record.minutes());
            }

            let key = record.category.as_deref();
            let index = *category_index.entry(key).or_insert_with(|| {
                let color = if palette.is_empty() {
                    String::new()
                } else {
                    palette[categories.len() % palette.len()].clone()
                };
                categories.push(CategoryCount {
                    category: key.map(ToString::to_string),
                    sessions: 0,
                    color,
                });
                categories.len() - 1
            });
            categories[index].sessions = categories[index].sessions.saturating_add(1);
        }

        Self {
            today,
            today_minutes: today_seconds / 60,
            total_minutes: total_seconds / 60,
            total_distractions,
            session_count: records.len() as u64,
            streak_days: calculate_streak(&active_days, today),
            daily,
            categories,
        }
    }

    /// Re-read the store and aggregate it.
    ///
    /// This is the hook hosts call whenever the report becomes visible or
    /// the user asks for a refresh.
    pub fn load<S: KeyValueStore>(
        store: &SessionStore<S>,
        today: NaiveDate,
        palette: &[String],
    ) -> Self {
        let records = store.read_all();
        log::debug!("aggregating {} sessions for {today}", records.len());
        Self::from_records(&records, today, palette)
    }

    /// Whether any session is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.session_count == 0
    }

    /// Total focus time in hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}

/// Count consecutive active days backwards from today.
///
/// A day without sessions today does not break the streak until tomorrow.
fn calculate_streak(active_days: &HashSet<NaiveDate>, today: NaiveDate) -> u64 {
    let mut check_date = today;

    if !active_days.contains(&today) {
        check_date = today - Duration::days(1);
        if !active_days.contains(&check_date) {
            return 0;
        }
    }

    let mut streak = 0;
    while active_days.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::NewSession;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()
    }

    fn palette() -> Vec<String> {
        vec!["#FF9F0A".to_string(), "#FF453A".to_string()]
    }

    fn record(date: NaiveDate, duration: u64, category: &str, distractions: u32) -> SessionRecord {
        NewSession::new(date, duration, category, distractions).into_record(String::new())
    }

    #[test]
    fn test_two_sessions_today() {
        let records = vec![
            record(today(), 1500, "A", 0),
            record(today(), 600, "B", 2),
        ];

        let summary = ReportSummary::from_records(&records, today(), &palette());

        assert_eq!(summary.today_minutes, 35);
        assert_eq!(summary.total_minutes, 35);
        assert_eq!(summary.total_distractions, 2);
        assert_eq!(summary.session_count, 2);

        let counts: Vec<(&str, u64)> = summary
            .categories
            .iter()
            .map(|c| (c.label(), c.sessions))
            .collect();
        assert_eq!(counts, vec![("A", 1), ("B", 1)]);
    }

    #[test]
    fn test_empty_store() {
        let summary = ReportSummary::from_records(&[], today(), &palette());

        assert_eq!(summary.today_minutes, 0);
        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.total_distractions, 0);
        assert_eq!(summary.streak_days, 0);
        assert!(summary.is_empty());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.daily.len(), WINDOW_DAYS);
        assert!(summary.daily.iter().all(|d| d.minutes == 0));
    }

    #[test]
    fn test_daily_window_is_oldest_first() {
        let summary = ReportSummary::from_records(&[], today(), &palette());
        let labels: Vec<&str> = summary.daily.iter().map(|d| d.label.as_str()).collect();

        assert_eq!(labels, vec!["02", "03", "04", "05", "06", "07", "08"]);
        assert_eq!(summary.daily[0].date, today() - Duration::days(6));
        assert_eq!(summary.daily[6].date, today());
    }

    #[test]
    fn test_daily_minutes_floor_per_session() {
        let yesterday = today() - Duration::days(1);
        let records = vec![
            record(yesterday, 89, "A", 0),
            record(yesterday, 89, "A", 0),
            record(today(), 120, "A", 0),
        ];

        let summary = ReportSummary::from_records(&records, today(), &palette());

        // floor(89/60) twice, not floor(178/60)
        assert_eq!(summary.daily[5].minutes, 2);
        assert_eq!(summary.daily[6].minutes, 2);
        // totals floor the sum
        assert_eq!(summary.total_minutes, 4);
    }

    #[test]
    fn test_records_outside_window_count_in_totals_only() {
        let records = vec![
            record(today() - Duration::days(7), 3600, "Old", 3),
            record(today() + Duration::days(1), 600, "Future", 0),
        ];

        let summary = ReportSummary::from_records(&records, today(), &palette());

        assert!(summary.daily.iter().all(|d| d.minutes == 0));
        assert_eq!(summary.total_minutes, 70);
        assert_eq!(summary.total_distractions, 3);
        assert_eq!(summary.today_minutes, 0);
        assert_eq!(summary.categories.len(), 2);
    }

    #[test]
    fn test_category_colors_cycle_by_first_occurrence() {
        let records = vec![
            record(today(), 60, "Coding", 0),
            record(today(), 60, "Study", 0),
            record(today(), 60, "Coding", 0),
            record(today(), 60, "Reading", 0),
        ];

        let summary = ReportSummary::from_records(&records, today(), &palette());

        let shape: Vec<(&str, u64, &str)> = summary
            .categories
            .iter()
            .map(|c| (c.label(), c.sessions, c.color.as_str()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Coding", 2, "#FF9F0A"),
                ("Study", 1, "#FF453A"),
                ("Reading", 1, "#FF9F0A"),
            ]
        );
    }

    #[test]
    fn test_missing_category_is_its_own_key() {
        let mut uncategorized = record(today(), 60, "x", 0);
        uncategorized.category = None;
        let mut literal = record(today(), 60, UNCATEGORIZED, 0);
        literal.id = "literal".to_string();

        let summary =
            ReportSummary::from_records(&[uncategorized, literal], today(), &palette());

        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, None);
        assert_eq!(
            summary.categories[1].category.as_deref(),
            Some(UNCATEGORIZED)
        );
    }

    #[test]
    fn test_streak() {
        let days = |offsets: &[i64]| -> HashSet<NaiveDate> {
            offsets
                .iter()
                .map(|o| today() - Duration::days(*o))
                .collect()
        };

        assert_eq!(calculate_streak(&days(&[]), today()), 0);
        assert_eq!(calculate_streak(&days(&[0, 1, 2]), today()), 3);
        assert_eq!(calculate_streak(&days(&[1, 2]), today()), 2);
        assert_eq!(calculate_streak(&days(&[0, 2, 3]), today()), 1);
        assert_eq!(calculate_streak(&days(&[2, 3]), today()), 0);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let records = vec![
            record(today(), u64::MAX, "Coding", u32::MAX),
            record(today(), 60, "Coding", 1),
        ];

        let summary = ReportSummary::from_records(&records, today(), &palette());

        assert_eq!(summary.total_minutes, u64::MAX / 60);
        assert_eq!(summary.today_minutes, u64::MAX / 60);
        assert_eq!(summary.total_distractions, u64::from(u32::MAX) + 1);
        assert_eq!(summary.daily[6].minutes, u64::MAX / 60 + 1);
        assert_eq!(summary.session_count, 2);
    }

    #[test]
    fn test_total_hours() {
        let records = vec![record(today(), 7200, "A", 0)];
        let summary = ReportSummary::from_records(&records, today(), &palette());
        assert!((summary.total_hours() - 2.0).abs() < 0.01);
    }
}
