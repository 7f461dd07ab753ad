//! Output formatting for focustrack.
//!
//! Renders reports and session lists for the non-interactive commands.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::SessionRecord;
use crate::features::report::ReportSummary;

pub use json::*;
pub use pretty::*;

/// Format a report based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_report(summary: &ReportSummary, format: OutputFormat) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(summary)),
        OutputFormat::Json => format_report_json(summary),
    }
}

/// Format session records based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[SessionRecord],
    title: &str,
    format: OutputFormat,
) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}
