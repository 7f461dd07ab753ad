//! Chart-ready shapes of a [`ReportSummary`].

use serde::Serialize;

use super::summary::ReportSummary;

/// Labels and values for the weekly bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl BarSeries {
    /// Largest value, or zero for an empty series.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(label, value)` pairs in chart order.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// One slice of the category-share chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub value: u64,
    pub color: String,
}

impl CategoryShare {
    /// Share of `total` as a percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.value as f64 / total as f64 * 100.0
        }
    }
}

impl ReportSummary {
    /// Daily minutes shaped for a bar chart.
    #[must_use]
    pub fn bar_series(&self) -> BarSeries {
        BarSeries {
            labels: self.daily.iter().map(|d| d.label.clone()).collect(),
            values: self.daily.iter().map(|d| d.minutes).collect(),
        }
    }

    /// Category counts shaped for a share chart.
    #[must_use]
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        self.categories
            .iter()
            .map(|c| CategoryShare {
                label: c.label().to_string(),
                value: c.sessions,
                color: c.color.clone(),
            })
            .collect()
    }
}
