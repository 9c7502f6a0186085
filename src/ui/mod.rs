mod command_bar;
mod dialog;
mod header;
mod layout;
mod overlay;
mod pages;
mod sidebar;
mod status_bar;
mod table;
mod text;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    sidebar::render(frame, app_layout.sidebar, state);
    pages::render(frame, app_layout.content, state);
    if state.goto_open {
        command_bar::render(frame, app_layout.status_bar, state);
    } else {
        status_bar::render(frame, app_layout.status_bar, state);
    }

    // Overlays, topmost last
    if let Some(dialog) = state.page.dialog() {
        dialog::render(frame, dialog);
    }
    overlay::render_profile_menu(frame, state);
    if state.show_help {
        overlay::render_help(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::{Page, REPORT_TABS, STUDENTS_TAB};
    use crate::config::AppConfig;
    use crate::router::Route;
    use crate::test_helpers::{buffer_lines, key, press, render_state};
    use crossterm::event::KeyCode;

    const W: u16 = 140;
    const H: u16 = 40;

    fn state_at(route: Route) -> AppState {
        AppState::new(AppConfig::default(), route)
    }

    fn sidebar_column(screen: &str) -> Vec<String> {
        screen
            .lines()
            .map(|l| l.chars().take(layout::SIDEBAR_WIDTH as usize).collect())
            .collect()
    }

    fn content_column(screen: &str) -> String {
        screen
            .lines()
            .map(|l| l.chars().skip(layout::SIDEBAR_WIDTH as usize).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_each_route_highlights_one_entry() {
        for route in Route::SIDEBAR {
            let screen = render_state(&state_at(route), W, H);
            let marked: Vec<String> = sidebar_column(&screen)
                .into_iter()
                .filter(|l| l.contains(sidebar::ACTIVE_MARKER))
                .collect();
            assert_eq!(marked.len(), 1, "route {}", route);
            assert!(marked[0].contains(route.label()), "route {}", route);
            assert!(content_column(&screen).contains(route.title()), "route {}", route);
        }
    }

    #[test]
    fn test_header() {
        let screen = render_state(&state_at(Route::Dashboard), W, H);
        let first = screen.lines().next().unwrap();
        assert!(first.contains(header::APP_TITLE));
        assert!(first.contains(" 2 "));
        assert!(first.contains(" A "));
    }

    #[test]
    fn test_dashboard_cards_and_charts() {
        let screen = render_state(&state_at(Route::Dashboard), W, H);
        for needle in ["Total Students", "1,234", "92%", "Internships by Department", "SDG Distribution"] {
            assert!(screen.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_report_tabs_render_one_panel() {
        let panels = [
            "Applications by Department",
            "Application Timeline",
            "Application Status",
            "Performance Metrics",
        ];
        let mut state = state_at(Route::Reports);
        for (i, _) in REPORT_TABS.iter().enumerate() {
            let screen = render_state(&state, W, H);
            for (j, panel) in panels.iter().enumerate() {
                assert_eq!(screen.contains(panel), i == j, "tab {} panel {}", i, panel);
            }
            press(&mut state, key(KeyCode::Char(']')));
        }
    }

    /// Walk every tab and check only the active panel's marker is drawn.
    fn assert_tabs_exclusive(route: Route, markers: &[&str]) {
        let mut state = state_at(route);
        for i in 0..markers.len() {
            let screen = render_state(&state, W, H);
            for (j, marker) in markers.iter().enumerate() {
                assert_eq!(screen.contains(marker), i == j, "{} tab {} marker {}", route, i, marker);
            }
            press(&mut state, key(KeyCode::Char(']')));
        }
    }

    #[test]
    fn test_mapping_tabs_render_one_table() {
        assert_tabs_exclusive(Route::Mapping, &["SDG 4", "PO 1", "PEO 1"]);
    }

    #[test]
    fn test_progress_tabs_render_one_panel() {
        assert_tabs_exclusive(Route::Progress, &["Project Proposal", "% completed", "STU001"]);
    }

    #[test]
    fn test_last_page_rows() {
        let mut config = AppConfig::default();
        config.ui.page_size = 5;
        let mut state = AppState::new(config, Route::Internships);
        press(&mut state, key(KeyCode::Right));
        press(&mut state, key(KeyCode::Right));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("11–12 of 12"));
        assert!(screen.contains("Robotics Intern"));
        assert!(screen.contains("Water Resources Intern"));
        assert!(!screen.contains("Software Development Intern"));
    }

    #[test]
    fn test_student_filter_renders_department_only() {
        let mut state = state_at(Route::Progress);
        if let Page::Progress(p) = &mut state.page {
            p.tabs.select(STUDENTS_TAB);
            p.students.set_filter("Computer Science");
        }
        let screen = render_state(&state, W, H);
        assert!(screen.contains("John Doe"));
        assert!(screen.contains("Michael"));
        for other in ["Jane Smith", "Robert Johnson", "Emily Davis"] {
            assert!(!screen.contains(other), "{} should be filtered out", other);
        }
    }

    #[test]
    fn test_notification_toolbar_uses_category_label() {
        let mut state = state_at(Route::Notifications);
        press(&mut state, key(KeyCode::Char('f')));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("Filter: Deadline"));
        assert!(!screen.contains("Filter: deadline"));
    }

    #[test]
    fn test_department_overview_gauges() {
        let mut state = state_at(Route::Progress);
        press(&mut state, key(KeyCode::Char(']')));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("71% completed"));
        assert!(screen.contains("Civil"));
    }

    #[test]
    fn test_dialog_overlay() {
        let mut state = state_at(Route::Internships);
        press(&mut state, key(KeyCode::Char('n')));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("Add New Internship"));
        assert!(screen.contains("Enter Create"));
        assert!(screen.contains("Title *"));

        press(&mut state, key(KeyCode::Enter));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("! Title is required"));
    }

    #[test]
    fn test_delete_prompt() {
        let mut state = state_at(Route::Users);
        press(&mut state, key(KeyCode::Char('d')));
        let screen = render_state(&state, W, H);
        assert!(screen.contains("Delete User"));
        assert!(screen.contains("Enter Delete"));
    }

    #[test]
    fn test_goto_bar_replaces_status() {
        let mut state = state_at(Route::Dashboard);
        press(&mut state, key(KeyCode::Char(':')));
        let screen = render_state(&state, W, H);
        let last = screen.lines().last().unwrap();
        assert!(last.contains("Go to ❯ /"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut state = state_at(Route::Settings);
        press(&mut state, key(KeyCode::Char('x')));
        let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        assert_eq!(buffer_lines(terminal.backend().buffer()).len(), 6);
    }
}
