//! Focus reports.
//!
//! Aggregates stored sessions into today/total figures, a seven-day chart
//! and per-category counts.

pub mod chart;
pub mod screen;
pub mod summary;

pub use chart::{BarSeries, CategoryShare};
pub use screen::ReportScreen;
pub use summary::{CategoryCount, DailyMinutes, ReportSummary, WINDOW_DAYS};
