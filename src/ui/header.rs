use crate::app::state::*;
use crate::ui::text;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const APP_TITLE: &str = "Internship Management System";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Theme::BG_SURFACE;

    let left = vec![
        Span::styled(
            " ▦ ",
            Style::default()
                .fg(Theme::ACCENT_BLUE)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let mut right: Vec<Span> = Vec::new();
    if state.config.ui.show_clock {
        right.push(Span::styled(
            format!("{}  ", state.clock),
            Style::default().fg(Theme::TEXT_SECONDARY).bg(bg),
        ));
    }
    right.push(Span::styled("✉", Style::default().fg(Theme::TEXT_SECONDARY).bg(bg)));
    if state.badge > 0 {
        right.push(Span::styled(
            format!(" {} ", state.badge),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::ACCENT_RED)
                .add_modifier(Modifier::BOLD),
        ));
    }
    right.push(Span::styled("  ", Style::default().bg(bg)));
    let avatar_style = if state.profile_menu.is_some() {
        Style::default().fg(Theme::BG_DARK).bg(Theme::ACCENT_AMBER)
    } else {
        Style::default().fg(Theme::BG_DARK).bg(Theme::ACCENT_BLUE)
    };
    right.push(Span::styled(" A ", avatar_style.add_modifier(Modifier::BOLD)));
    right.push(Span::styled(" ", Style::default().bg(bg)));

    let used_left: usize = left.iter().map(|s| text::width(&s.content)).sum();
    let used_right: usize = right.iter().map(|s| text::width(&s.content)).sum();

    let mut parts = left;
    parts.push(Span::styled(
        text::gap(area.width as usize, used_left, used_right),
        Style::default().bg(bg),
    ));
    parts.extend(right);

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::header()), area);
}
