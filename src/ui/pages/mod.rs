//! One renderer per route, drawn inside the content panel.

mod dashboard;
mod mapping;
mod progress;
mod reports;
mod settings;

use crate::app::pages::{Page, TabBar};
use crate::app::state::*;
use crate::model::report::Slice;
use crate::ui::table::{self, EDIT_HINTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Tabs};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Content;
    let block = Block::default()
        .title(format!(" {} ", state.route().title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.page {
        Page::Dashboard => dashboard::render(frame, inner),
        Page::Internships(view) => table::render_resource(frame, inner, view, focused, EDIT_HINTS),
        Page::Users(view) => table::render_resource(frame, inner, view, focused, EDIT_HINTS),
        Page::Notifications(view) => table::render_resource(
            frame,
            inner,
            view,
            focused,
            &[("n", "Send"), ("e", "Edit"), ("d", "Delete")],
        ),
        Page::Progress(p) => progress::render(frame, inner, p, focused),
        Page::Reports(p) => reports::render(frame, inner, p),
        Page::Mapping(p) => mapping::render(frame, inner, p, focused),
        Page::Settings(p) => settings::render(frame, inner, p, focused),
    }
}

/// Draw the tab strip on the first row and return the area below it.
fn render_tabs(frame: &mut Frame, area: Rect, tabs: &TabBar) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let strip = Tabs::new(tabs.titles().iter().map(|t| format!(" {} ", t)))
        .select(tabs.index())
        .style(Theme::hint_text())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::border()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Theme::border()),
        );
    frame.render_widget(strip, chunks[0]);
    chunks[1]
}

fn panel(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title)).title_style(Theme::title())
    }
}

/// Vertical bar chart of a fixed distribution, one colour per bar.
fn slice_chart<'a>(title: &str, slices: &'a [Slice], bar_width: u16) -> BarChart<'a> {
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = Theme::SERIES[i % Theme::SERIES.len()];
            Bar::default()
                .label(Line::from(s.label))
                .value(s.value)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Theme::BG_DARK).bg(color))
        })
        .collect();
    BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
}
