use super::{panel, slice_chart};
use crate::model::dashboard::{StatCard, INTERNSHIPS_BY_DEPARTMENT, SDG_DISTRIBUTION, STAT_CARDS};
use crate::model::report::share;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

pub fn render(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for (card, slot) in STAT_CARDS.iter().zip(cards.iter()) {
        render_card(frame, *slot, card);
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    frame.render_widget(
        slice_chart("Internships by Department", INTERNSHIPS_BY_DEPARTMENT, 9),
        charts[0],
    );
    render_sdg_distribution(frame, charts[1]);
}

fn render_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    let lines = vec![
        Line::from(Span::styled(card.title, Theme::hint_text())),
        Line::from(vec![
            Span::styled(format!("{} ", card.icon), Theme::tone(card.tone)),
            Span::styled(
                card.value,
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("")), area);
}

/// Horizontal bars labelled with each goal's share of the total.
fn render_sdg_distribution(frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = SDG_DISTRIBUTION
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = Theme::SERIES[i % Theme::SERIES.len()];
            Bar::default()
                .label(Line::from(s.label))
                .value(s.value)
                .text_value(format!("{}%", share(SDG_DISTRIBUTION, s)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Theme::BG_DARK).bg(color))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel("SDG Distribution"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1);
    frame.render_widget(chart, area);
}
