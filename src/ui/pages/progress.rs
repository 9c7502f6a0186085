use super::{panel, render_tabs};
use crate::app::pages::{ProgressPage, DEPARTMENTS_TAB, MILESTONES_TAB, STUDENTS_TAB};
use crate::model::progress::DepartmentProgress;
use crate::resource::Tone;
use crate::ui::table::{self, EDIT_HINTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, page: &ProgressPage, focused: bool) {
    let body = render_tabs(frame, area, &page.tabs);
    match page.tabs.index() {
        MILESTONES_TAB => table::render_resource(frame, body, &page.milestones, focused, EDIT_HINTS),
        DEPARTMENTS_TAB => render_departments(frame, body, &page.departments),
        STUDENTS_TAB => table::render_resource(frame, body, &page.students, focused, &[]),
        _ => {}
    }
}

fn render_departments(frame: &mut Frame, area: Rect, departments: &[DepartmentProgress]) {
    let constraints: Vec<Constraint> = departments.iter().map(|_| Constraint::Length(5)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (dept, slot) in departments.iter().zip(rows.iter()) {
        let block = panel(dept.department);
        let inner = block.inner(*slot);
        frame.render_widget(block, *slot);
        if inner.height < 2 {
            continue;
        }

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let counts = Line::from(vec![
            Span::styled(format!("Total {}  ", dept.total), Theme::hint_text()),
            Span::styled(format!("● Completed {}  ", dept.completed), Theme::tone(Tone::Success)),
            Span::styled(format!("● In Progress {}  ", dept.in_progress), Theme::tone(Tone::Warning)),
            Span::styled(format!("● At Risk {}", dept.at_risk), Theme::tone(Tone::Error)),
        ]);
        frame.render_widget(Paragraph::new(counts), parts[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED))
            .ratio(dept.ratio().clamp(0.0, 1.0))
            .label(format!("{:.0}% completed", dept.ratio() * 100.0));
        frame.render_widget(gauge, parts[1]);
    }
}
