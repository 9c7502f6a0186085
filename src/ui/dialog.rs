use crate::resource::form::{Field, FieldKind};
use crate::resource::Dialog;
use crate::ui::layout::centered;
use crate::ui::text;
use crate::ui::theme::Theme;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const DIALOG_WIDTH: u16 = 64;

pub fn render(frame: &mut Frame, dialog: &Dialog) {
    let inner_width = DIALOG_WIDTH.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    if let Some(intro) = &dialog.intro {
        for row in text::wrap(intro, inner_width) {
            lines.push(Line::from(Span::styled(row, Theme::hint_text())));
        }
        lines.push(Line::default());
    }

    for (i, field) in dialog.form.fields.iter().enumerate() {
        let focused = i == dialog.form.focused;
        let mut label = vec![Span::styled(
            field.label.clone(),
            if focused {
                Theme::key_hint()
            } else {
                Style::default().fg(Theme::TEXT_SECONDARY)
            },
        )];
        if field.required {
            label.push(Span::styled(" *", Style::default().fg(Theme::ACCENT_RED)));
        }
        lines.push(Line::from(label));

        let value_row = lines.len();
        lines.extend(field_lines(field, focused, inner_width));
        if focused && field.is_text() {
            // Two columns for the "│ " gutter
            let col = 2 + field.input.cursor_column().min(inner_width.saturating_sub(3));
            cursor = Some((col as u16, value_row as u16));
        }
    }

    if let Some(err) = &dialog.form.error {
        lines.push(Line::default());
        for row in text::wrap(&format!("! {}", err), inner_width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(Theme::ACCENT_RED).add_modifier(Modifier::BOLD),
            )));
        }
    }

    lines.push(Line::default());
    let confirm_style = if dialog.destructive {
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .bg(Theme::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    } else {
        Theme::tab_active()
    };
    let cancel = " Esc Cancel ";
    let confirm = format!(" Enter {} ", dialog.confirm_label);
    lines.push(Line::from(vec![
        Span::raw(text::gap(inner_width, text::width(cancel) + text::width(&confirm) + 2, 0)),
        Span::styled(cancel, Style::default().fg(Theme::TEXT_PRIMARY).bg(Theme::BG_ELEVATED)),
        Span::raw("  "),
        Span::styled(confirm, confirm_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);

    let border_color = if dialog.destructive {
        Theme::ACCENT_RED
    } else {
        Theme::ACCENT_LAVENDER
    };
    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((x, y)) = cursor {
        if y < inner.height {
            frame.set_cursor_position((inner.x + x, inner.y + y));
        }
    }
}

fn field_lines(field: &Field, focused: bool, width: usize) -> Vec<Line<'static>> {
    let gutter = Span::styled(
        "│ ",
        Style::default().fg(if focused {
            Theme::ACCENT_BLUE
        } else {
            Theme::BORDER_DIM
        }),
    );
    let value_style = Style::default().fg(Theme::TEXT_PRIMARY);
    let width = width.saturating_sub(2);

    match &field.kind {
        FieldKind::Select { .. } => {
            let label = field.selected_label().unwrap_or("Select…");
            let arrows = if focused { Theme::key_hint() } else { Theme::hint_text() };
            vec![Line::from(vec![
                gutter,
                Span::styled("◀ ", arrows),
                Span::styled(label.to_string(), value_style),
                Span::styled(" ▶", arrows),
            ])]
        }
        FieldKind::MultiSelect {
            options,
            chosen,
            cursor,
        } => options
            .iter()
            .zip(chosen)
            .enumerate()
            .map(|(i, (choice, on))| {
                let mark = if *on { "[x] " } else { "[ ] " };
                let style = if focused && i == *cursor {
                    Theme::selected_row().fg(Theme::ACCENT_BLUE)
                } else {
                    value_style
                };
                Line::from(vec![
                    gutter.clone(),
                    Span::styled(format!("{}{}", mark, text::truncate(choice.label, width)), style),
                ])
            })
            .collect(),
        _ if field.input.text.is_empty() => {
            let placeholder = field.placeholder.unwrap_or("");
            vec![Line::from(vec![
                gutter,
                Span::styled(placeholder, Style::default().fg(Theme::TEXT_MUTED)),
            ])]
        }
        _ => vec![Line::from(vec![
            gutter,
            Span::styled(text::truncate(&field.input.text, width), value_style),
        ])],
    }
}
