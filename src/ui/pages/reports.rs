use super::{panel, render_tabs, slice_chart};
use crate::app::pages::ReportsPage;
use crate::model::report::{
    applications_by_department, performance_metrics, share, timeline, APPLICATION_STATUS, MONTHS,
};
use crate::resource::Tone;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
};

pub fn render(frame: &mut Frame, area: Rect, page: &ReportsPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);
    let hint = Line::from(vec![
        Span::styled(" s", Theme::key_hint()),
        Span::styled(" Share report  ", Theme::hint_text()),
        Span::styled("[ ]", Theme::key_hint()),
        Span::styled(" Switch tab", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[0]);

    let body = render_tabs(frame, chunks[1], &page.tabs);
    match page.tabs.index() {
        0 => render_overview(frame, body),
        1 => render_timeline(frame, body),
        2 => render_distribution(frame, body),
        _ => render_analytics(frame, body),
    }
}

fn render_overview(frame: &mut Frame, area: Rect) {
    let data = applications_by_department();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(data.len() as u16 + 3), Constraint::Min(6)])
        .split(area);

    let rows: Vec<Row> = data
        .iter()
        .map(|d| {
            Row::new(vec![
                Cell::from(d.department),
                Cell::from(d.applications.to_string()),
                Cell::from(Span::styled(d.accepted.to_string(), Theme::tone(Tone::Success))),
                Cell::from(Span::styled(d.rejected.to_string(), Theme::tone(Tone::Error))),
                Cell::from(d.acceptance_rate()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ],
    )
    .header(
        Row::new(["Department", "Applications", "Accepted", "Rejected", "Acceptance Rate"])
            .style(Theme::table_header()),
    )
    .block(panel("Applications by Department"));
    frame.render_widget(table, chunks[0]);

    let groups: Vec<BarGroup> = data
        .iter()
        .map(|d| {
            let bar = |value: u32, color: Color| {
                Bar::default()
                    .value(u64::from(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Theme::BG_DARK).bg(color))
            };
            BarGroup::default()
                .label(Line::from(d.department))
                .bars(&[
                    bar(d.applications, Theme::ACCENT_BLUE),
                    bar(d.accepted, Theme::ACCENT_GREEN),
                    bar(d.rejected, Theme::ACCENT_RED),
                ])
        })
        .collect();
    let mut chart = BarChart::default()
        .block(panel("Applications ■ Accepted ■ Rejected"))
        .bar_width(4)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, chunks[1]);
}

fn render_timeline(frame: &mut Frame, area: Rect) {
    let series = timeline();
    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, f64::from(*v)))
                .collect()
        })
        .collect();
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .max()
        .unwrap_or(0);
    let y_max = f64::from(max.div_ceil(10) * 10).max(10.0);

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (s, data))| {
            Dataset::default()
                .name(s.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::SERIES[i % Theme::SERIES.len()]))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(panel("Application Timeline"))
        .x_axis(
            Axis::default()
                .style(Theme::hint_text())
                .bounds([0.0, (MONTHS.len() - 1) as f64])
                .labels(MONTHS.iter().map(|m| Span::raw(*m)).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .style(Theme::hint_text())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", y_max / 2.0)),
                    Span::raw(format!("{}", y_max)),
                ]),
        );
    frame.render_widget(chart, area);
}

fn render_distribution(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    frame.render_widget(slice_chart("Application Status", APPLICATION_STATUS, 9), chunks[0]);

    let lines: Vec<Line> = APPLICATION_STATUS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Theme::SERIES[i % Theme::SERIES.len()])),
                Span::styled(format!("{:<12}", s.label), Style::default().fg(Theme::TEXT_PRIMARY)),
                Span::styled(format!("{:>3}%", share(APPLICATION_STATUS, s)), Theme::hint_text()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel("Share")), chunks[1]);
}

fn render_analytics(frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = performance_metrics()
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.name),
                Cell::from(m.current_label()),
                Cell::from(m.previous_label()),
                Cell::from(Span::styled(m.change_label(), Theme::tone(m.change_tone()))),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(Row::new(["Metric", "Current", "Previous", "Change"]).style(Theme::table_header()))
    .block(panel("Performance Metrics"));
    frame.render_widget(table, area);
}
