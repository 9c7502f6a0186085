//! Generic paginated table for any [`Record`] type.

use crate::resource::{Record, ResourceView};
use crate::ui::text;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

/// Key hints shown above the table, as `(key, action)` pairs.
pub type Hints<'a> = &'a [(&'a str, &'a str)];

pub const EDIT_HINTS: Hints<'static> = &[("n", "New"), ("e", "Edit"), ("d", "Delete")];

pub fn render_resource<T: Record>(
    frame: &mut Frame,
    area: Rect,
    view: &ResourceView<T>,
    focused: bool,
    hints: Hints,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Pagination footer
        ])
        .split(area);

    render_toolbar(frame, chunks[0], view, hints);
    render_rows(frame, chunks[1], view, focused);
    render_footer(frame, chunks[2], view);
}

fn render_toolbar<T: Record>(frame: &mut Frame, area: Rect, view: &ResourceView<T>, hints: Hints) {
    let mut spans: Vec<Span> = Vec::new();
    if let Some(current) = view.filter_label() {
        spans.push(Span::styled(" Filter: ", Theme::key_hint()));
        spans.push(Span::styled(current, Style::default().fg(Theme::TEXT_PRIMARY)));
        spans.push(Span::styled(" (f)   ", Theme::hint_text()));
    }
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {} ", action), Theme::hint_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_rows<T: Record>(frame: &mut Frame, area: Rect, view: &ResourceView<T>, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let rows = view.page_rows();
    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(
            format!("  No {} records match.", T::noun().to_lowercase()),
            Style::default().fg(Theme::TEXT_MUTED),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let columns = T::columns();
    // Borders, plus the highlight symbol when a row is selected
    let inner_width = area.width.saturating_sub(if focused { 4 } else { 2 }) as usize;
    let col_widths: Vec<usize> = columns
        .iter()
        .map(|c| (inner_width * c.width as usize / 100).saturating_sub(1))
        .collect();

    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(c.title))
            .collect::<Vec<_>>(),
    )
    .style(Theme::table_header());

    let body: Vec<Row> = rows
        .iter()
        .map(|record| {
            let cells: Vec<Cell> = record
                .cells()
                .into_iter()
                .zip(&col_widths)
                .map(|(cell, w)| {
                    Cell::from(Span::styled(text::truncate(&cell.text, *w), Theme::tone(cell.tone)))
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|c| Constraint::Percentage(c.width))
        .collect();

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::selected_row())
        .highlight_symbol("› ");

    let mut table_state = TableState::default();
    if focused {
        table_state.select(Some(view.cursor()));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer<T: Record>(frame: &mut Frame, area: Rect, view: &ResourceView<T>) {
    let paginator = view.paginator;
    let len = view.filtered_len();
    let left = format!(" Rows per page: {} (s)", paginator.page_size());
    let right = format!(
        "{}   page {}/{}  ←/→ ",
        view.page_label(),
        paginator.page() + 1,
        paginator.page_count(len)
    );
    let line = Line::from(vec![
        Span::styled(left.clone(), Theme::hint_text()),
        Span::raw(text::gap(area.width as usize, text::width(&left), text::width(&right))),
        Span::styled(right, Style::default().fg(Theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
