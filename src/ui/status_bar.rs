use crate::app::state::*;
use crate::resource::Tone;
use crate::ui::text;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let text_style = match state.status_message.as_ref().map(|m| m.tone) {
        Some(Tone::Error) => Style::default().fg(Theme::ACCENT_RED).bg(Theme::BG_ELEVATED),
        Some(tone) if tone != Tone::Plain => {
            Style::default().fg(Theme::tone_color(tone)).bg(Theme::BG_ELEVATED)
        }
        _ => Theme::status_bar(),
    };
    let mut parts: Vec<Span> = vec![Span::styled(format!(" {} ", state.status_line()), text_style)];

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Sidebar => "MENU",
        FocusPanel::Content => "CONTENT",
    };
    let used: usize = parts.iter().map(|s| text::width(&s.content)).sum();
    parts.push(Span::styled(
        text::gap(area.width as usize, used, focus_name.len() + 3),
        Theme::status_bar(),
    ));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
