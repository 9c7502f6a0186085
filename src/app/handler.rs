use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::pages::{Page, SettingsPage, MILESTONES_TAB, STUDENTS_TAB};
use crate::app::state::*;
use crate::model::report::SHARE_TYPE_FIELD;
use crate::model::settings::{DataAction, SettingsItem};
use crate::resource::{Editable, Form, Record, ResourceView};
use crate::router::{self, Route};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.config.ui.show_clock && state.tick_clock() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Overlays capture all input while open
    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter) {
            state.show_help = false;
        }
        return vec![];
    }
    if state.goto_open {
        return handle_goto_key(state, key);
    }
    if state.profile_menu.is_some() {
        return handle_profile_key(state, key);
    }
    if state.page.dialog().is_some() {
        return handle_dialog_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::Char(':') | KeyCode::Char('g') => {
            state.open_goto();
            return vec![];
        }
        KeyCode::Char('a') => {
            state.profile_menu = Some(0);
            return vec![];
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            return vec![];
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(route) = Route::from_digit(c) {
                state.status_message = None;
                state.mount(route);
            }
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Sidebar => handle_sidebar_key(state, key),
        FocusPanel::Content => handle_content_key(state, key),
    }
}

fn handle_sidebar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = Route::SIDEBAR.len();
    match key.code {
        KeyCode::Up => {
            state.sidebar_cursor = (state.sidebar_cursor + len - 1) % len;
        }
        KeyCode::Down => {
            state.sidebar_cursor = (state.sidebar_cursor + 1) % len;
        }
        KeyCode::Enter | KeyCode::Right => {
            let route = Route::SIDEBAR[state.sidebar_cursor % len];
            state.status_message = None;
            state.mount(route);
            state.focus = FocusPanel::Content;
        }
        _ => {}
    }
    vec![]
}

fn handle_goto_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.close_goto(),
        KeyCode::Enter => {
            let path = state.goto_input.take_text();
            state.close_goto();
            match state.navigate(&path) {
                Ok(resolved) if resolved.redirected => {
                    state.set_status(format!("{} → {}", path.trim(), resolved.route));
                }
                Ok(_) => state.status_message = None,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "route error");
                    state.set_error(e.to_string());
                }
            }
        }
        KeyCode::Tab => try_path_completion(state),
        KeyCode::Backspace => state.goto_input.delete_back(),
        KeyCode::Delete => state.goto_input.delete_forward(),
        KeyCode::Left => state.goto_input.move_left(),
        KeyCode::Right => state.goto_input.move_right(),
        KeyCode::Home => state.goto_input.move_home(),
        KeyCode::End => state.goto_input.move_end(),
        KeyCode::Up => state.goto_input.history_up(),
        KeyCode::Down => state.goto_input.history_down(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.goto_input.delete_word_back();
        }
        KeyCode::Char(c) => state.goto_input.insert_char(c),
        _ => {}
    }
    vec![]
}

/// Complete the typed prefix to the first known path.
fn try_path_completion(state: &mut AppState) {
    let text = state.goto_input.text.trim().to_string();
    let prefix = if text.starts_with('/') {
        text
    } else {
        format!("/{}", text)
    };
    if let Some(first) = router::complete(&prefix).first() {
        state.goto_input.text = first.to_string();
        state.goto_input.cursor = state.goto_input.text.len();
    }
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(selected) = state.profile_menu else {
        return vec![];
    };
    let len = PROFILE_MENU.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('a') => state.profile_menu = None,
        KeyCode::Up => state.profile_menu = Some((selected + len - 1) % len),
        KeyCode::Down => state.profile_menu = Some((selected + 1) % len),
        KeyCode::Enter => {
            let item = PROFILE_MENU[selected % len];
            state.profile_menu = None;
            tracing::info!(item, "profile menu");
            state.set_status(format!("{} is not available in this demo", item));
        }
        _ => {}
    }
    vec![]
}

fn handle_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let route = state.route();
    match key.code {
        KeyCode::Esc => {
            if let Some(dialog) = state.page.cancel_dialog() {
                tracing::info!(title = %dialog.title, "dialog cancelled");
                state.status_message = None;
            }
            vec![]
        }
        KeyCode::Enter => match state.page.confirm_dialog() {
            Some(Ok(submission)) => {
                tracing::info!(title = %submission.title, action = %submission.action, "dialog confirmed");
                let mut actions = Vec::new();
                if route == Route::Reports && submission.value(SHARE_TYPE_FIELD) == Some("link") {
                    actions.push(Action::GenerateShareLink);
                } else {
                    state.set_status(format!("{}: {} (sample data, nothing saved)", submission.title, submission.action));
                }
                actions.push(Action::Submitted { route, submission });
                actions
            }
            Some(Err(e)) => {
                tracing::debug!(error = %e, "validation failed");
                state.set_error(e.to_string());
                vec![]
            }
            None => vec![],
        },
        _ => {
            let Some(dialog) = state.page.dialog_mut() else {
                return vec![];
            };
            if edit_form(&mut dialog.form, key) {
                state.page.sync_dialog();
            }
            vec![]
        }
    }
}

/// Route a key into the focused form field. Returns true when a select may
/// have changed value.
fn edit_form(form: &mut Form, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => {
            form.left();
            return true;
        }
        KeyCode::Right => {
            form.right();
            return true;
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Home => {
            if let Some(f) = form.focused_field_mut() {
                f.input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(f) = form.focused_field_mut() {
                f.input.move_end();
            }
        }
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
    false
}

fn handle_content_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Tab switching is shared by every tabbed page
    if let Some(tabs) = state.page.tabs_mut() {
        match key.code {
            KeyCode::Char('[') => {
                tabs.prev();
                return vec![];
            }
            KeyCode::Char(']') => {
                tabs.next();
                return vec![];
            }
            _ => {}
        }
    }

    let status = match &mut state.page {
        Page::Dashboard => None,
        Page::Internships(view) => table_key(view, key.code).or_else(|| edit_key(view, key.code)),
        Page::Users(view) => table_key(view, key.code).or_else(|| edit_key(view, key.code)),
        Page::Notifications(view) => table_key(view, key.code).or_else(|| edit_key(view, key.code)),
        Page::Progress(p) => match p.tabs.index() {
            STUDENTS_TAB => table_key(&mut p.students, key.code),
            MILESTONES_TAB => table_key(&mut p.milestones, key.code).or_else(|| edit_key(&mut p.milestones, key.code)),
            _ => None,
        },
        Page::Mapping(p) => {
            if key.code == KeyCode::Char('n') {
                p.open_add();
                None
            } else {
                let view = p.current_mut();
                table_key(view, key.code).or_else(|| edit_key(view, key.code))
            }
        }
        Page::Reports(p) => {
            if key.code == KeyCode::Char('s') {
                p.open_share();
            }
            None
        }
        Page::Settings(p) => settings_key(p, key.code),
    };
    if let Some(text) = status {
        state.set_status(text);
    }
    vec![]
}

/// Browsing keys shared by every table. Returns a status line for keys that
/// changed what is shown.
fn table_key<T: Record>(view: &mut ResourceView<T>, code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => view.select_prev(),
        KeyCode::Down => view.select_next(),
        KeyCode::Left => {
            view.prev_page();
        }
        KeyCode::Right => {
            view.next_page();
        }
        KeyCode::Home => view.jump_page(false),
        KeyCode::End => view.jump_page(true),
        KeyCode::Char('s') => {
            view.cycle_page_size();
            return Some(format!("Rows per page: {}", view.paginator.page_size()));
        }
        KeyCode::Char('f') => {
            view.cycle_filter();
            return view.filter_label().map(|label| format!("Filter: {}", label));
        }
        _ => {}
    }
    None
}

/// Create / edit / delete keys for editable tables.
fn edit_key<T: Editable>(view: &mut ResourceView<T>, code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char('e') | KeyCode::Enter => {
            if view.open_edit() {
                tracing::debug!(noun = T::noun(), "edit dialog opened");
            }
        }
        KeyCode::Char('n') => view.open_create(),
        KeyCode::Char('d') => {
            view.open_delete();
        }
        _ => {}
    }
    None
}

fn settings_key(page: &mut SettingsPage, code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => page.move_up(),
        KeyCode::Down => page.move_down(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let item = page.selected();
            if let Some(toggle) = page.settings.toggle(item) {
                let state = if toggle.enabled { "on" } else { "off" };
                return Some(format!("{}: {}", toggle.label, state));
            }
        }
        KeyCode::Left | KeyCode::Right => {
            let item = page.selected();
            page.settings.adjust(item, code == KeyCode::Right);
            if item == SettingsItem::Retention {
                return Some(format!("Data retention: {} days", page.settings.retention_days));
            }
        }
        KeyCode::Char('S') => {
            tracing::info!(values = ?page.settings.values(), "settings saved");
            return Some("Settings saved (sample data, nothing persisted)".to_string());
        }
        KeyCode::Char('b') => page.open_data_action(DataAction::Backup),
        KeyCode::Char('r') => page.open_data_action(DataAction::Restore),
        KeyCode::Char('x') => page.open_data_action(DataAction::Delete),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::test_helpers::{ctrl, key, press, type_str};

    fn state_at(route: Route) -> AppState {
        AppState::new(AppConfig::default(), route)
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state_at(Route::Dashboard);
        assert_eq!(press(&mut s, ctrl('c')), vec![Action::Quit]);
        assert_eq!(press(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_q_types_into_dialog() {
        let mut s = state_at(Route::Internships);
        press(&mut s, key(KeyCode::Char('n')));
        assert!(press(&mut s, key(KeyCode::Char('q'))).is_empty());
        assert_eq!(s.page.dialog().unwrap().form.value("Title").as_deref(), Some("q"));
    }

    #[test]
    fn test_digit_navigation() {
        let mut s = state_at(Route::Dashboard);
        for (i, route) in Route::SIDEBAR.iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap();
            press(&mut s, key(KeyCode::Char(digit)));
            assert_eq!(s.route(), *route);
            assert_eq!(s.sidebar_cursor, i);
        }
    }

    #[test]
    fn test_goto_bar() {
        let mut s = state_at(Route::Dashboard);
        press(&mut s, key(KeyCode::Char(':')));
        assert!(s.goto_open);
        type_str(&mut s, "mapping/");
        press(&mut s, key(KeyCode::Enter));
        assert!(!s.goto_open);
        assert_eq!(s.route(), Route::Mapping);
    }

    #[test]
    fn test_goto_root_redirects() {
        let mut s = state_at(Route::Settings);
        press(&mut s, key(KeyCode::Char('g')));
        press(&mut s, key(KeyCode::Enter));
        assert_eq!(s.route(), Route::Dashboard);
        assert_eq!(s.status_line(), "/ → /dashboard");
    }

    #[test]
    fn test_goto_unknown_path() {
        let mut s = state_at(Route::Users);
        press(&mut s, key(KeyCode::Char(':')));
        type_str(&mut s, "nowhere");
        press(&mut s, key(KeyCode::Enter));
        assert_eq!(s.route(), Route::Users);
        assert_eq!(s.status_message.as_ref().unwrap().tone, crate::resource::Tone::Error);
        assert!(s.status_line().contains("/nowhere"));
    }

    #[test]
    fn test_goto_completion() {
        let mut s = state_at(Route::Dashboard);
        press(&mut s, key(KeyCode::Char(':')));
        type_str(&mut s, "no");
        press(&mut s, key(KeyCode::Tab));
        assert_eq!(s.goto_input.text, "/notifications");
        press(&mut s, key(KeyCode::Esc));
        assert!(!s.goto_open);
        assert_eq!(s.route(), Route::Dashboard);
    }

    #[test]
    fn test_sidebar_focus() {
        let mut s = state_at(Route::Dashboard);
        press(&mut s, key(KeyCode::Tab));
        assert_eq!(s.focus, FocusPanel::Sidebar);
        press(&mut s, key(KeyCode::Up));
        press(&mut s, key(KeyCode::Enter));
        assert_eq!(s.route(), Route::Settings);
        assert_eq!(s.focus, FocusPanel::Content);
    }

    #[test]
    fn test_edit_then_cancel_and_confirm() {
        let mut s = state_at(Route::Users);
        press(&mut s, key(KeyCode::Down));
        press(&mut s, key(KeyCode::Char('e')));
        let dialog = s.page.dialog().unwrap();
        assert_eq!(dialog.title, "Edit User");
        assert_eq!(dialog.form.value("Name").as_deref(), Some("Jane Smith"));
        press(&mut s, key(KeyCode::Esc));
        assert!(s.page.dialog().is_none());

        press(&mut s, key(KeyCode::Enter));
        let actions = press(&mut s, key(KeyCode::Enter));
        assert!(matches!(
            actions.as_slice(),
            [Action::Submitted { route: Route::Users, .. }]
        ));
        let Page::Users(view) = &s.page else {
            panic!("expected users page");
        };
        assert_eq!(view.records(), &crate::model::user::fixtures()[..]);
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let mut s = state_at(Route::Internships);
        press(&mut s, key(KeyCode::Char('n')));
        assert!(press(&mut s, key(KeyCode::Enter)).is_empty());
        assert!(s.page.dialog().unwrap().form.error.is_some());
        assert_eq!(s.status_message.as_ref().unwrap().text, "Title is required");
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut s = state_at(Route::Internships);
        press(&mut s, key(KeyCode::Right));
        press(&mut s, key(KeyCode::Char('s')));
        let Page::Internships(view) = &s.page else {
            panic!("expected internships page");
        };
        assert_eq!(view.paginator.page(), 0);
        assert_eq!(view.paginator.page_size(), 25);
    }

    #[test]
    fn test_home_end_jump_pages() {
        let mut s = state_at(Route::Users);
        press(&mut s, key(KeyCode::Down));
        press(&mut s, key(KeyCode::End));
        let Page::Users(view) = &s.page else {
            panic!("expected users page");
        };
        assert_eq!(view.paginator.page(), 1);
        assert_eq!(view.cursor(), 0);
        press(&mut s, key(KeyCode::Home));
        let Page::Users(view) = &s.page else {
            panic!("expected users page");
        };
        assert_eq!(view.paginator.page(), 0);
    }

    #[test]
    fn test_edit_mapping_on_po_tab() {
        let mut s = state_at(Route::Mapping);
        press(&mut s, key(KeyCode::Char(']')));
        press(&mut s, key(KeyCode::Char('e')));
        let dialog = s.page.dialog().unwrap();
        assert_eq!(dialog.title, "Edit Mapping");
        assert_eq!(dialog.intro, None);
        assert_eq!(dialog.form.value("PO Code").unwrap(), "PO 1");

        press(&mut s, key(KeyCode::Esc));
        press(&mut s, key(KeyCode::Char('n')));
        let dialog = s.page.dialog().unwrap();
        assert_eq!(
            dialog.intro.as_deref(),
            Some("Create a new mapping between internships and PO.")
        );
    }

    #[test]
    fn test_notification_filter_shows_label() {
        let mut s = state_at(Route::Notifications);
        press(&mut s, key(KeyCode::Char('f')));
        assert_eq!(s.status_line(), "Filter: Deadline");
    }

    #[test]
    fn test_tabs_switch() {
        let mut s = state_at(Route::Progress);
        press(&mut s, key(KeyCode::Char(']')));
        press(&mut s, key(KeyCode::Char(']')));
        assert_eq!(s.page.tabs().unwrap().index(), STUDENTS_TAB);
        press(&mut s, key(KeyCode::Char('f')));
        assert_eq!(s.status_line(), "Filter: Computer Science");
        let Page::Progress(p) = &s.page else {
            panic!("expected progress page");
        };
        assert!(p
            .students
            .page_rows()
            .iter()
            .all(|r| r.department == "Computer Science"));
    }

    #[test]
    fn test_share_link_action() {
        let mut s = state_at(Route::Reports);
        press(&mut s, key(KeyCode::Char('s')));
        press(&mut s, key(KeyCode::Right));
        let actions = press(&mut s, key(KeyCode::Enter));
        assert_eq!(actions.first(), Some(&Action::GenerateShareLink));
        assert!(s.page.dialog().is_none());
    }

    #[test]
    fn test_settings_keys() {
        let mut s = state_at(Route::Settings);
        press(&mut s, key(KeyCode::Down));
        press(&mut s, key(KeyCode::Down));
        press(&mut s, key(KeyCode::Char(' ')));
        assert_eq!(s.status_line(), "SMS Notifications: on");
        press(&mut s, key(KeyCode::Char('x')));
        assert!(s.page.dialog().unwrap().destructive);
        press(&mut s, key(KeyCode::Esc));
        press(&mut s, key(KeyCode::Char('S')));
        assert!(s.status_line().starts_with("Settings saved"));
    }

    #[test]
    fn test_profile_menu() {
        let mut s = state_at(Route::Dashboard);
        press(&mut s, key(KeyCode::Char('a')));
        assert_eq!(s.profile_menu, Some(0));
        press(&mut s, key(KeyCode::Up));
        assert_eq!(s.profile_menu, Some(2));
        press(&mut s, key(KeyCode::Enter));
        assert!(s.profile_menu.is_none());
        assert!(s.status_line().starts_with("Logout"));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut s = state_at(Route::Dashboard);
        press(&mut s, key(KeyCode::Char('?')));
        assert!(s.show_help);
        assert!(press(&mut s, key(KeyCode::Char('3'))).is_empty());
        assert_eq!(s.route(), Route::Dashboard);
        press(&mut s, key(KeyCode::Esc));
        assert!(!s.show_help);
    }
}
