use crate::app::state::*;
use crate::router::Route;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// Marker drawn beside the entry of the mounted route.
pub const ACTIVE_MARKER: &str = "▌";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Sidebar;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let current = state.route();
    let items: Vec<ListItem> = Route::SIDEBAR
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let is_active = *route == current;
            let under_cursor = focused && i == state.sidebar_cursor;

            let marker = if is_active {
                Span::styled(ACTIVE_MARKER, Style::default().fg(Theme::ACCENT_BLUE))
            } else {
                Span::raw(" ")
            };
            let mut style = if is_active {
                Style::default()
                    .fg(Theme::ACCENT_BLUE)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT_SECONDARY)
            };
            if under_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            ListItem::new(Line::from(vec![
                marker,
                Span::styled(format!("{} {} ", route.icon(), route.label()), style),
                Span::styled(format!("{}", i + 1), Style::default().fg(Theme::TEXT_MUTED)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
