use super::panel;
use crate::app::pages::SettingsPage;
use crate::model::settings::{SettingsItem, Toggle};
use crate::resource::Tone;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, page: &SettingsPage, focused: bool) {
    let settings = &page.settings;
    let selected = focused.then(|| page.selected());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(settings.notifications.len() as u16 + 2),
            Constraint::Length(settings.security.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);

    let notification_lines: Vec<Line> = settings
        .notifications
        .iter()
        .enumerate()
        .map(|(i, t)| toggle_line(t, selected == Some(SettingsItem::Notification(i))))
        .collect();
    frame.render_widget(
        Paragraph::new(notification_lines).block(panel("Notification Settings")),
        left[0],
    );

    let security_lines: Vec<Line> = settings
        .security
        .iter()
        .enumerate()
        .map(|(i, t)| toggle_line(t, selected == Some(SettingsItem::Security(i))))
        .collect();
    frame.render_widget(
        Paragraph::new(security_lines).block(panel("Security Settings")),
        left[1],
    );

    let system_lines = vec![
        value_line("Language", settings.language().label, selected == Some(SettingsItem::Language)),
        value_line("Timezone", settings.timezone().label, selected == Some(SettingsItem::Timezone)),
        value_line(
            "Data Retention (days)",
            &settings.retention_days.to_string(),
            selected == Some(SettingsItem::Retention),
        ),
    ];
    frame.render_widget(
        Paragraph::new(system_lines).block(panel("System Settings")),
        right[0],
    );

    let key = |k: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {:<3}", k), Theme::key_hint()),
            Span::styled(action, Theme::hint_text()),
        ])
    };
    let data_lines = vec![
        key("b", "Backup Data"),
        key("r", "Restore Data"),
        Line::from(vec![
            Span::styled(" x  ", Theme::key_hint()),
            Span::styled("Delete All Data", Theme::tone(Tone::Error)),
        ]),
        key("S", "Save Changes"),
    ];
    frame.render_widget(
        Paragraph::new(data_lines).block(panel("Data Management")),
        right[1],
    );
}

fn cursor_style(selected: bool) -> Style {
    if selected {
        Theme::selected_row().fg(Theme::ACCENT_BLUE)
    } else {
        Style::default().fg(Theme::TEXT_PRIMARY)
    }
}

fn toggle_line(toggle: &Toggle, selected: bool) -> Line<'static> {
    let (switch, style) = if toggle.enabled {
        ("[ on  ■]", Theme::tone(Tone::Success))
    } else {
        ("[□  off]", Theme::tone(Tone::Muted))
    };
    Line::from(vec![
        Span::styled(format!(" {:<30}", toggle.label), cursor_style(selected)),
        Span::styled(switch, style),
    ])
}

fn value_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let arrows = if selected { Theme::key_hint() } else { Theme::hint_text() };
    Line::from(vec![
        Span::styled(format!(" {:<22}", label), cursor_style(selected)),
        Span::styled("◀ ", arrows),
        Span::styled(value.to_string(), Style::default().fg(Theme::TEXT_PRIMARY)),
        Span::styled(" ▶", arrows),
    ])
}
