use crate::app::state::AppState;
use crate::router;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const PROMPT: &str = " Go to ❯ ";

/// One-line path input drawn over the status bar while open.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let input = &state.goto_input;
    let matches = router::complete(input.text.trim());
    let hint = match matches.as_slice() {
        [] => "  no match".to_string(),
        [one] if *one == input.text.trim() => String::new(),
        many => format!("  Tab: {}", many.join(" ")),
    };

    let line = Line::from(vec![
        Span::styled(PROMPT, Theme::key_hint().bg(Theme::BG_ELEVATED)),
        Span::styled(
            input.text.as_str(),
            Style::default().fg(Theme::TEXT_PRIMARY).bg(Theme::BG_ELEVATED),
        ),
        Span::styled(hint, Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);

    let prompt_width = crate::ui::text::width(PROMPT) as u16;
    let cursor_x = area.x + prompt_width + input.cursor_column() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}
