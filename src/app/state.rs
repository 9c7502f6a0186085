use chrono::Local;

use crate::app::pages::Page;
use crate::config::AppConfig;
use crate::input::InputState;
use crate::model::notification;
use crate::resource::{Paginator, Tone};
use crate::router::{self, Resolved, Route, RouteError};

pub const PROFILE_MENU: &[&str] = &["Profile", "My Account", "Logout"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub focus: FocusPanel,
    pub sidebar_cursor: usize,
    /// Go-to bar input. Kept across openings so history survives.
    pub goto_input: InputState,
    pub goto_open: bool,
    /// Highlighted entry of the open profile menu.
    pub profile_menu: Option<usize>,
    pub show_help: bool,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
    pub clock: String,
    /// Unsent notifications shown on the header badge.
    pub badge: usize,
}

impl AppState {
    pub fn new(config: AppConfig, start: Route) -> Self {
        let paginator = Paginator::new(config.ui.page_size).unwrap_or_default();
        let clock = Local::now().format(&config.ui.clock_format).to_string();
        Self {
            page: Page::mount(start, paginator),
            config,
            focus: FocusPanel::Content,
            sidebar_cursor: start.sidebar_index(),
            goto_input: InputState::new(),
            goto_open: false,
            profile_menu: None,
            show_help: false,
            status_message: None,
            should_quit: false,
            dirty: true,
            clock,
            badge: notification::pending_count(&notification::fixtures()),
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.config.ui.page_size).unwrap_or_default()
    }

    /// Replace the mounted page with a fresh one for `route`.
    pub fn mount(&mut self, route: Route) {
        let from = self.route();
        self.page = Page::mount(route, self.paginator());
        self.sidebar_cursor = route.sidebar_index();
        self.dirty = true;
        tracing::info!(from = %from, to = %route, "navigated");
    }

    /// Resolve and mount `path`. On error the current page stays mounted.
    pub fn navigate(&mut self, path: &str) -> Result<Resolved, RouteError> {
        let resolved = router::resolve(path)?;
        if resolved.redirected {
            tracing::debug!(path, to = %resolved.route, "redirect");
        }
        self.mount(resolved.route);
        Ok(resolved)
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            tone: Tone::Info,
        });
        self.dirty = true;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            tone: Tone::Error,
        });
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Sidebar => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Sidebar,
        };
        if self.focus == FocusPanel::Sidebar {
            self.sidebar_cursor = self.route().sidebar_index();
        }
        self.dirty = true;
    }

    /// Refresh the header clock. Returns true when the text changed.
    pub fn tick_clock(&mut self) -> bool {
        let now = Local::now().format(&self.config.ui.clock_format).to_string();
        if now == self.clock {
            return false;
        }
        self.clock = now;
        true
    }

    pub fn open_goto(&mut self) {
        self.goto_open = true;
        self.goto_input.text = "/".to_string();
        self.goto_input.cursor = 1;
        self.goto_input.history_index = None;
    }

    pub fn close_goto(&mut self) {
        self.goto_open = false;
        self.goto_input.clear();
    }

    /// Status bar text: the last message, or a hint for the focused panel.
    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.text.clone();
        }
        match self.focus {
            FocusPanel::Sidebar => "↑↓ choose page  Enter open  Tab content  ? help".to_string(),
            FocusPanel::Content => format!("{}  Tab sidebar  : go to  ? help", self.route()),
        }
    }
}
