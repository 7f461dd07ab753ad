//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::parse_hex_color;
use crate::features::focus::{format_minutes, Notice, TimerPhase};
use crate::features::report::ReportSummary;
use crate::tui::app::{App, Tab};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Create layout: tabs, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.tab {
        Tab::Timer => render_timer(frame, app, chunks[1]),
        Tab::Report => render_report(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);

    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

/// Render the tab header.
fn render_tabs(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let titles: Vec<String> = Tab::ALL.iter().map(|t| format!(" {t} ")).collect();
    let focus = if app.is_foreground() {
        Span::styled(" focused ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" away ", Style::default().fg(Color::Red))
    };

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" focustrack ")
                .title_bottom(Line::from(focus).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the countdown screen.
fn render_timer(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Categories
            Constraint::Length(5), // Clock
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Details
        ])
        .split(area);

    let timer = app.timer();

    let mut spans = Vec::new();
    for category in app.categories() {
        let selected = timer.category() == Some(category.as_str());
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {category} "), style));
        spans.push(Span::raw(" "));
    }
    let categories = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Category ")
            .borders(Borders::ALL),
    );
    frame.render_widget(categories, chunks[0]);

    let clock_color = match timer.phase() {
        TimerPhase::Running => Color::Green,
        TimerPhase::Paused => Color::Yellow,
        TimerPhase::Completed => Color::Cyan,
        TimerPhase::Idle => Color::White,
    };
    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            timer.format_remaining(),
            Style::default()
                .fg(clock_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            timer.phase().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(clock, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(clock_color))
        .ratio(timer.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[2]);

    let details = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Duration: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_minutes(u64::from(timer.initial_seconds() / 60))),
        ]),
        Line::from(vec![
            Span::styled("Distractions: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                timer.distractions().to_string(),
                Style::default().fg(if timer.distractions() > 0 {
                    Color::Yellow
                } else {
                    Color::White
                }),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(details, chunks[3]);
}

/// Render the report screen.
fn render_report(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let Some(summary) = app.report() else {
        let loading = Paragraph::new("Loading...").block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Totals
            Constraint::Length(12), // Weekly chart
            Constraint::Min(0),     // Categories
        ])
        .split(area);

    render_totals(frame, summary, chunks[0]);
    render_weekly(frame, summary, chunks[1]);
    render_categories(frame, summary, chunks[2]);
}

fn render_totals(frame: &mut Frame<'_>, summary: &ReportSummary, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let totals = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Today: ", label),
            Span::styled(
                format_minutes(summary.today_minutes),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("   Total: ", label),
            Span::styled(
                format_minutes(summary.total_minutes),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Distractions: ", label),
            Span::styled(
                summary.total_distractions.to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("   Sessions: ", label),
            Span::raw(summary.session_count.to_string()),
            Span::styled("   Streak: ", label),
            Span::styled(
                format!("{}d", summary.streak_days),
                Style::default().fg(Color::Green),
            ),
        ]),
    ])
    .block(Block::default().title(" Report ").borders(Borders::ALL));

    frame.render_widget(totals, area);
}

fn render_weekly(frame: &mut Frame<'_>, summary: &ReportSummary, area: Rect) {
    let series = summary.bar_series();
    let data: Vec<(&str, u64)> = series.points().collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Last 7 days (minutes) ")
                .borders(Borders::ALL),
        )
        .data(data.as_slice())
        .bar_width(4)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::Black).bg(Color::Blue));

    frame.render_widget(chart, area);
}

fn render_categories(frame: &mut Frame<'_>, summary: &ReportSummary, area: Rect) {
    let shares = summary.category_shares();
    let lines: Vec<Line<'_>> = if shares.is_empty() {
        vec![Line::from(Span::styled(
            "No sessions yet. Press s to load sample data.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let max = shares.iter().map(|s| s.value).max().unwrap_or(1).max(1);
        let width = shares.iter().map(|s| s.label.len()).max().unwrap_or(0);
        shares
            .iter()
            .map(|share| {
                let color = parse_hex_color(&share.color)
                    .map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b));
                let bar = usize::try_from(share.value * 20 / max).unwrap_or(20);
                Line::from(vec![
                    Span::raw(format!("{:width$} ", share.label)),
                    Span::styled("█".repeat(bar.max(1)), Style::default().fg(color)),
                    Span::raw(format!(
                        " {} ({:.0}%)",
                        share.value,
                        share.percent_of(summary.session_count)
                    )),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Sessions by category ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or_else(|| app.help());
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render a notice popup over the current screen.
fn render_notice(frame: &mut Frame<'_>, notice: &Notice) {
    let (title, body) = notice.message();
    let color = match notice {
        Notice::Interrupted { .. } => Color::Yellow,
        Notice::Completed(_) | Notice::TimeUp => Color::Green,
    };

    let area = centered_rect(50, 9, frame.area());
    let mut lines: Vec<Line<'_>> = body.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
