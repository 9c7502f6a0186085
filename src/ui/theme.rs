use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::resource::Tone;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39);
    pub const BG_SURFACE: Color = Color::Rgb(31, 41, 55);
    pub const BG_ELEVATED: Color = Color::Rgb(55, 65, 81);
    pub const BORDER_DIM: Color = Color::Rgb(75, 85, 99);
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246);
    pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
    pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
    pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
    pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(167, 139, 250);

    /// Series colours for charts, in order.
    pub const SERIES: [Color; 5] = [
        Self::ACCENT_BLUE,
        Self::ACCENT_GREEN,
        Self::ACCENT_AMBER,
        Self::ACCENT_RED,
        Self::ACCENT_LAVENDER,
    ];

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Plain => Self::TEXT_PRIMARY,
            Tone::Muted => Self::TEXT_MUTED,
            Tone::Primary => Self::ACCENT_BLUE,
            Tone::Success => Self::ACCENT_GREEN,
            Tone::Warning => Self::ACCENT_AMBER,
            Tone::Error => Self::ACCENT_RED,
            Tone::Info => Self::ACCENT_TEAL,
        }
    }

    pub fn tone(tone: Tone) -> Style {
        Style::default().fg(Self::tone_color(tone))
    }

    /// Filled chip, used for status badges.
    pub fn chip(tone: Tone) -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::tone_color(tone))
            .add_modifier(Modifier::BOLD)
    }
}
