use crate::app::state::{AppState, PROFILE_MENU};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

const HELP: &[(&str, &str)] = &[
    ("1-8", "Open page"),
    (": / g", "Go to path"),
    ("Tab", "Switch menu / content"),
    ("↑ ↓", "Move selection"),
    ("← →", "Previous / next page"),
    ("Home End", "First / last page"),
    ("[ ]", "Previous / next tab"),
    ("s", "Rows per page (Reports: share)"),
    ("f", "Cycle filter"),
    ("n", "New / add / send"),
    ("e, Enter", "Edit selected"),
    ("d", "Delete selected"),
    ("a", "Account menu"),
    ("q, Ctrl+C", "Quit"),
];

/// Account dropdown anchored under the header avatar.
pub fn render_profile_menu(frame: &mut Frame, state: &AppState) {
    let Some(selected) = state.profile_menu else {
        return;
    };
    let screen = frame.area();
    let width = 18u16.min(screen.width);
    let height = (PROFILE_MENU.len() as u16 + 2).min(screen.height.saturating_sub(1));
    let area = Rect::new(screen.right().saturating_sub(width + 1), screen.y + 1, width, height);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = PROFILE_MENU
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected {
                Theme::selected_row().fg(Theme::ACCENT_BLUE)
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            ListItem::new(Span::styled(format!(" {} ", item), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));
    frame.render_widget(List::new(items).block(block), area);
}

pub fn render_help(frame: &mut Frame) {
    let area = centered(frame.area(), 48, HELP.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<11}", key), Theme::key_hint()),
                Span::styled(*action, Theme::hint_text()),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Esc to close",
        Style::default().fg(Theme::TEXT_MUTED),
    )));

    let block = Block::default()
        .title(" Keys ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
