use colored::{ColoredString, Colorize};

use crate::config::parse_hex_color;
use crate::features::focus::{format_minutes, format_mmss, SessionRecord};
use crate::features::report::{BarSeries, ReportSummary};

const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';
const BAR_WIDTH: usize = 30;

/// Format a report as a readable summary with charts.
#[must_use]
pub fn format_report_pretty(summary: &ReportSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Focus Report".bold()));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if summary.is_empty() {
        output.push_str(&format!("{}\n", "No focus sessions yet.".dimmed()));
        output.push_str(&format!(
            "{}\n",
            "Complete a session or run `focustrack seed` to add sample data.".dimmed()
        ));
        return output;
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Today".dimmed(),
        format_minutes(summary.today_minutes).cyan()
    ));
    output.push_str(&format!(
        "  {}: {} ({:.1}h)\n",
        "Total".dimmed(),
        format_minutes(summary.total_minutes).cyan(),
        summary.total_hours()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        summary.session_count
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Distractions".dimmed(),
        summary.total_distractions.to_string().yellow()
    ));
    if summary.streak_days > 0 {
        output.push_str(&format!(
            "  {}: {} day{}\n",
            "Streak".dimmed(),
            summary.streak_days.to_string().green(),
            if summary.streak_days == 1 { "" } else { "s" }
        ));
    }

    let series = summary.bar_series();
    output.push_str(&format!(
        "\n{}  {}\n",
        "Last 7 days".bold(),
        render_sparkline(&series.values)
    ));
    output.push_str(&render_bar_chart(&series, BAR_WIDTH));
    output.push('\n');

    output.push_str(&format!("\n{}\n", "Categories".bold()));
    let shares = summary.category_shares();
    let width = shares.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for share in &shares {
        output.push_str(&format!(
            "  {} {:width$}  {} session{} ({:.0}%)\n",
            swatch(&share.color),
            share.label,
            share.value,
            if share.value == 1 { "" } else { "s" },
            share.percent_of(summary.session_count),
        ));
    }

    output
}

/// Format stored sessions, newest first as given.
#[must_use]
pub fn format_sessions_pretty(sessions: &[SessionRecord], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{title} (0 sessions)\n  No sessions");
    }

    let mut output = format!("{} ({} sessions)\n", title, sessions.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for session in sessions {
        let mut line = format!(
            "{}  {}  {}",
            session.date.to_string().dimmed(),
            format_mmss(session.duration).cyan(),
            session.category_label().bold()
        );

        if session.distractions > 0 {
            line.push_str(&format!(
                "  {}",
                format!(
                    "{} distraction{}",
                    session.distractions,
                    if session.distractions == 1 { "" } else { "s" }
                )
                .yellow()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Render labelled horizontal bars scaled to the largest value.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn render_bar_chart(series: &BarSeries, bar_width: usize) -> String {
    if series.values.is_empty() {
        return String::new();
    }

    let max_value = series.max().max(1);
    let mut lines = Vec::new();

    for (label, value) in series.points() {
        let bar_length = (value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("  {} |{}{} {}m", label, bar.blue(), padding, value));
    }

    lines.join("\n")
}

/// Render a compact single-line chart.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn render_sparkline(values: &[u64]) -> String {
    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

fn swatch(color: &str) -> ColoredString {
    match parse_hex_color(color) {
        Some((r, g, b)) => "●".truecolor(r, g, b),
        None => "●".normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::sample::sample_sessions;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()
    }

    fn sample_report() -> ReportSummary {
        let palette = vec!["#FF9F0A".to_string(), "#0A84FF".to_string()];
        ReportSummary::from_records(&sample_sessions(today()), today(), &palette)
    }

    #[test]
    fn test_format_report_pretty_empty() {
        let summary = ReportSummary::from_records(&[], today(), &[]);
        let result = format_report_pretty(&summary);

        assert!(result.contains("Focus Report"));
        assert!(result.contains("No focus sessions yet."));
        assert!(!result.contains("Categories"));
    }

    #[test]
    fn test_format_report_pretty_totals() {
        let result = format_report_pretty(&sample_report());

        assert!(result.contains("1 hour, 10 minutes"));
        assert!(result.contains("2 hours, 55 minutes"));
        assert!(result.contains("Streak"));
        assert!(result.contains("Last 7 days"));
    }

    #[test]
    fn test_format_report_pretty_categories() {
        let result = format_report_pretty(&sample_report());

        assert!(result.contains("Coding"));
        assert!(result.contains("2 sessions (40%)"));
        assert!(result.contains("1 session (20%)"));
    }

    #[test]
    fn test_format_sessions_pretty_empty_list() {
        let result = format_sessions_pretty(&[], "History");

        assert!(result.contains("History (0 sessions)"));
        assert!(result.contains("No sessions"));
    }

    #[test]
    fn test_format_sessions_pretty_rows() {
        let result = format_sessions_pretty(&sample_sessions(today()), "History");

        assert!(result.contains("History (5 sessions)"));
        assert!(result.contains("2025-12-07"));
        assert!(result.contains("45:00"));
        assert!(result.contains("2 distractions"));
        assert!(result.contains("1 distraction"));
    }

    #[test]
    fn test_format_sessions_pretty_uncategorized() {
        let mut session = sample_sessions(today()).remove(0);
        session.category = None;
        let result = format_sessions_pretty(&[session], "History");

        assert!(result.contains("Uncategorized"));
    }

    #[test]
    fn test_render_bar_chart_scales_to_max() {
        let series = BarSeries {
            labels: vec!["01".to_string(), "02".to_string()],
            values: vec![10, 5],
        };
        let chart = render_bar_chart(&series, 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("10m"));
        assert!(lines[1].contains("5m"));
        assert_eq!(lines[0].matches(FULL_BLOCK).count(), 10);
        assert_eq!(lines[1].matches(FULL_BLOCK).count(), 5);
    }

    #[test]
    fn test_render_bar_chart_empty() {
        let series = BarSeries {
            labels: vec![],
            values: vec![],
        };
        assert!(render_bar_chart(&series, 10).is_empty());
    }

    #[test]
    fn test_render_sparkline() {
        assert_eq!(render_sparkline(&[]), "");
        assert_eq!(render_sparkline(&[0, 0]), "  ");

        let line: Vec<char> = render_sparkline(&[0, 1, 70]).chars().collect();
        assert_eq!(line[0], ' ');
        assert_eq!(line[1], '▁');
        assert_eq!(line[2], '▇');
    }
}
