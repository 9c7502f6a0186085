//! Shared helpers for handler and rendering tests.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(c))
    }
}

pub fn press(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    handler::handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
}

pub fn type_str(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, key(KeyCode::Char(c)));
    }
}

/// Flatten a buffer into lines of text, one per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}

/// Render the whole app on a test terminal and return the screen text.
pub fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| crate::ui::render(f, state)).unwrap();
    buffer_text(terminal.backend().buffer())
}
