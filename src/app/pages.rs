//! Per-page local state, rebuilt from fixtures every time a route mounts.

use crate::model::mapping::{self, Framework, Mapping};
use crate::model::notification::{self, Notification};
use crate::model::progress::{self, DepartmentProgress, Milestone, StudentProgress};
use crate::model::report::{self, RECIPIENTS_FIELD, SHARE_TYPE_FIELD};
use crate::model::settings::{DataAction, Settings, SettingsItem};
use crate::model::{department_names, internship, user};
use crate::model::internship::Internship;
use crate::model::user::User;
use crate::resource::{Dialog, DialogMode, FormError, Paginator, ResourceView, Submission};
use crate::router::Route;

/// Index into a fixed set of tab titles. Exactly one tab is active.
#[derive(Debug, Clone, Copy)]
pub struct TabBar {
    titles: &'static [&'static str],
    index: usize,
}

impl TabBar {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self { titles, index: 0 }
    }

    pub fn titles(&self) -> &'static [&'static str] {
        self.titles
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        self.titles[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.titles.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.titles.len() - 1) % self.titles.len();
    }

    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.index = index;
        }
    }
}

pub const PROGRESS_TABS: &[&str] = &["Milestones", "Department Overview", "Student Progress"];
pub const REPORT_TABS: &[&str] = &["Overview", "Timeline", "Distribution", "Analytics"];
pub const MAPPING_TABS: &[&str] = &[
    Framework::Sdg.tab_title(),
    Framework::Po.tab_title(),
    Framework::Peo.tab_title(),
];

pub const MILESTONES_TAB: usize = 0;
pub const DEPARTMENTS_TAB: usize = 1;
pub const STUDENTS_TAB: usize = 2;

#[derive(Debug, Clone)]
pub struct ProgressPage {
    pub tabs: TabBar,
    pub milestones: ResourceView<Milestone>,
    pub departments: Vec<DepartmentProgress>,
    pub students: ResourceView<StudentProgress>,
}

impl ProgressPage {
    fn mount(paginator: Paginator) -> Self {
        Self {
            tabs: TabBar::new(PROGRESS_TABS),
            milestones: ResourceView::new(progress::milestones(), paginator),
            departments: progress::department_progress(),
            students: ResourceView::new(progress::student_progress(), paginator)
                .with_filter(&department_names()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportsPage {
    pub tabs: TabBar,
    pub dialog: Option<Dialog>,
}

impl ReportsPage {
    pub fn open_share(&mut self) {
        let mut form = report::share_form();
        sync_share_form(&mut form);
        self.dialog = Some(
            Dialog::form("Share Report", form, "Share", DialogMode::Action)
                .intro("Choose how you want to share this report with others."),
        );
    }
}

/// Recipients are only required when sharing by email.
fn sync_share_form(form: &mut crate::resource::Form) {
    let by_email = form.value(SHARE_TYPE_FIELD).as_deref() == Some("email");
    if let Some(field) = form.field_mut(RECIPIENTS_FIELD) {
        field.required = by_email;
    }
}

#[derive(Debug, Clone)]
pub struct MappingPage {
    pub tabs: TabBar,
    pub views: Vec<ResourceView<Mapping>>,
}

impl MappingPage {
    fn mount(paginator: Paginator) -> Self {
        Self {
            tabs: TabBar::new(MAPPING_TABS),
            views: Framework::ALL
                .into_iter()
                .map(|f| ResourceView::new(mapping::fixtures(f), paginator))
                .collect(),
        }
    }

    pub fn framework(&self) -> Framework {
        Framework::ALL[self.tabs.index() % Framework::ALL.len()]
    }

    pub fn current(&self) -> &ResourceView<Mapping> {
        &self.views[self.tabs.index()]
    }

    pub fn current_mut(&mut self) -> &mut ResourceView<Mapping> {
        let idx = self.tabs.index();
        &mut self.views[idx]
    }

    /// Add dialog with the type preset to the visible tab.
    pub fn open_add(&mut self) {
        let framework = self.framework();
        let dialog = Dialog::form(
            "Add New Mapping",
            mapping::mapping_form(framework, None),
            "Add Mapping",
            DialogMode::Create,
        )
        .intro(framework.intro());
        self.current_mut().open_dialog(dialog);
    }
}

#[derive(Debug, Clone)]
pub struct SettingsPage {
    pub settings: Settings,
    pub cursor: usize,
    pub dialog: Option<Dialog>,
}

impl SettingsPage {
    pub fn selected(&self) -> SettingsItem {
        let items = self.settings.items();
        items[self.cursor.min(items.len() - 1)]
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.settings.items().len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn open_data_action(&mut self, action: DataAction) {
        let dialog = Dialog::confirm(
            action.title(),
            action.message(),
            action.action(),
            DialogMode::Action,
        );
        self.dialog = Some(if action == DataAction::Delete {
            dialog.destructive()
        } else {
            dialog
        });
    }
}

/// The mounted page. Only one exists at a time; navigating replaces it.
#[derive(Debug, Clone)]
pub enum Page {
    Dashboard,
    Internships(ResourceView<Internship>),
    Users(ResourceView<User>),
    Progress(ProgressPage),
    Reports(ReportsPage),
    Notifications(ResourceView<Notification>),
    Mapping(MappingPage),
    Settings(SettingsPage),
}

impl Page {
    pub fn mount(route: Route, paginator: Paginator) -> Self {
        match route {
            Route::Dashboard => Page::Dashboard,
            Route::Internships => Page::Internships(
                ResourceView::new(internship::fixtures(), paginator)
                    .with_filter(&department_names()),
            ),
            Route::Users => Page::Users(
                ResourceView::new(user::fixtures(), paginator)
                    .with_filter(&["admin", "faculty", "student"]),
            ),
            Route::Progress => Page::Progress(ProgressPage::mount(paginator)),
            Route::Reports => Page::Reports(ReportsPage {
                tabs: TabBar::new(REPORT_TABS),
                dialog: None,
            }),
            Route::Notifications => {
                let categories: Vec<&str> =
                    notification::CATEGORIES.iter().map(|c| c.value).collect();
                Page::Notifications(
                    ResourceView::new(notification::fixtures(), paginator)
                        .with_filter(&categories),
                )
            }
            Route::Mapping => Page::Mapping(MappingPage::mount(paginator)),
            Route::Settings => Page::Settings(SettingsPage {
                settings: Settings::default(),
                cursor: 0,
                dialog: None,
            }),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Dashboard => Route::Dashboard,
            Page::Internships(_) => Route::Internships,
            Page::Users(_) => Route::Users,
            Page::Progress(_) => Route::Progress,
            Page::Reports(_) => Route::Reports,
            Page::Notifications(_) => Route::Notifications,
            Page::Mapping(_) => Route::Mapping,
            Page::Settings(_) => Route::Settings,
        }
    }

    pub fn tabs(&self) -> Option<&TabBar> {
        match self {
            Page::Progress(p) => Some(&p.tabs),
            Page::Reports(p) => Some(&p.tabs),
            Page::Mapping(p) => Some(&p.tabs),
            _ => None,
        }
    }

    pub fn tabs_mut(&mut self) -> Option<&mut TabBar> {
        match self {
            Page::Progress(p) => Some(&mut p.tabs),
            Page::Reports(p) => Some(&mut p.tabs),
            Page::Mapping(p) => Some(&mut p.tabs),
            _ => None,
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            Page::Dashboard => None,
            Page::Internships(v) => v.dialog(),
            Page::Users(v) => v.dialog(),
            Page::Notifications(v) => v.dialog(),
            Page::Progress(p) => p.milestones.dialog(),
            Page::Mapping(p) => p.current().dialog(),
            Page::Reports(p) => p.dialog.as_ref(),
            Page::Settings(p) => p.dialog.as_ref(),
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        match self {
            Page::Dashboard => None,
            Page::Internships(v) => v.dialog_mut(),
            Page::Users(v) => v.dialog_mut(),
            Page::Notifications(v) => v.dialog_mut(),
            Page::Progress(p) => p.milestones.dialog_mut(),
            Page::Mapping(p) => p.current_mut().dialog_mut(),
            Page::Reports(p) => p.dialog.as_mut(),
            Page::Settings(p) => p.dialog.as_mut(),
        }
    }

    pub fn cancel_dialog(&mut self) -> Option<Dialog> {
        match self {
            Page::Dashboard => None,
            Page::Internships(v) => v.cancel_dialog(),
            Page::Users(v) => v.cancel_dialog(),
            Page::Notifications(v) => v.cancel_dialog(),
            Page::Progress(p) => p.milestones.cancel_dialog(),
            Page::Mapping(p) => p.current_mut().cancel_dialog(),
            Page::Reports(p) => p.dialog.take(),
            Page::Settings(p) => p.dialog.take(),
        }
    }

    /// Validate and close the open dialog. Fixture rows are never changed.
    pub fn confirm_dialog(&mut self) -> Option<Result<Submission, FormError>> {
        match self {
            Page::Dashboard => None,
            Page::Internships(v) => v.confirm_dialog(),
            Page::Users(v) => v.confirm_dialog(),
            Page::Notifications(v) => v.confirm_dialog(),
            Page::Progress(p) => p.milestones.confirm_dialog(),
            Page::Mapping(p) => p.current_mut().confirm_dialog(),
            Page::Reports(p) => submit_owned(&mut p.dialog),
            Page::Settings(p) => submit_owned(&mut p.dialog),
        }
    }

    /// Re-derive dependent fields after a select changed.
    pub fn sync_dialog(&mut self) {
        match self {
            Page::Mapping(p) => {
                if let Some(dialog) = p.current_mut().dialog_mut() {
                    if let Some(framework) = mapping::sync_code_field(&mut dialog.form) {
                        if dialog.mode == DialogMode::Create {
                            dialog.intro = Some(framework.intro());
                        }
                    }
                }
            }
            Page::Reports(p) => {
                if let Some(dialog) = p.dialog.as_mut() {
                    sync_share_form(&mut dialog.form);
                }
            }
            _ => {}
        }
    }
}

fn submit_owned(slot: &mut Option<Dialog>) -> Option<Result<Submission, FormError>> {
    let result = slot.as_mut()?.submit();
    if result.is_ok() {
        *slot = None;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Editable;

    fn mount(route: Route) -> Page {
        Page::mount(route, Paginator::default())
    }

    #[test]
    fn test_mount_matches_route() {
        for route in Route::SIDEBAR {
            assert_eq!(mount(route).route(), route);
        }
    }

    #[test]
    fn test_tabs_are_exclusive() {
        let mut page = mount(Route::Reports);
        let tabs = page.tabs_mut().unwrap();
        tabs.prev();
        assert_eq!(tabs.current(), "Analytics");
        tabs.next();
        assert_eq!(tabs.index(), 0);
        tabs.select(9);
        assert_eq!(tabs.index(), 0);
        assert!(mount(Route::Users).tabs().is_none());
    }

    #[test]
    fn test_student_department_filter() {
        let Page::Progress(mut p) = mount(Route::Progress) else {
            panic!("expected progress page");
        };
        assert_eq!(p.students.page_rows().len(), 5);
        p.students.set_filter("Computer Science");
        let rows = p.students.page_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|s| s.department == "Computer Science"));
        p.students.set_filter("all");
        assert_eq!(p.students.page_rows().len(), 5);
    }

    #[test]
    fn test_mapping_add_follows_tab() {
        let Page::Mapping(mut p) = mount(Route::Mapping) else {
            panic!("expected mapping page");
        };
        p.tabs.select(2);
        p.open_add();
        let dialog = p.current().dialog().unwrap();
        assert_eq!(dialog.form.value(mapping::TYPE_FIELD).as_deref(), Some("peo"));
        assert!(dialog.form.field("PEO Code").is_some());
        assert!(p.views[0].dialog().is_none());
    }

    #[test]
    fn test_mapping_type_change_updates_intro() {
        let mut page = mount(Route::Mapping);
        if let Page::Mapping(p) = &mut page {
            p.open_add();
        }
        page.dialog_mut().unwrap().form.right();
        page.sync_dialog();
        let dialog = page.dialog().unwrap();
        assert_eq!(
            dialog.intro.as_deref(),
            Some("Create a new mapping between internships and PO.")
        );
        assert!(dialog.form.field("PO Code").is_some());
    }

    #[test]
    fn test_share_requires_recipients_only_for_email() {
        let mut page = mount(Route::Reports);
        if let Page::Reports(p) = &mut page {
            p.open_share();
        }
        assert!(matches!(page.confirm_dialog(), Some(Err(FormError::Required { .. }))));

        page.dialog_mut().unwrap().form.right();
        page.sync_dialog();
        let sub = page.confirm_dialog().unwrap().unwrap();
        assert_eq!(sub.value(SHARE_TYPE_FIELD), Some("link"));
        assert!(page.dialog().is_none());
    }

    #[test]
    fn test_settings_delete_is_destructive() {
        let Page::Settings(mut p) = mount(Route::Settings) else {
            panic!("expected settings page");
        };
        p.open_data_action(DataAction::Backup);
        assert!(!p.dialog.as_ref().unwrap().destructive);
        p.open_data_action(DataAction::Delete);
        assert!(p.dialog.as_ref().unwrap().destructive);
    }

    #[test]
    fn test_settings_cursor_bounds() {
        let Page::Settings(mut p) = mount(Route::Settings) else {
            panic!("expected settings page");
        };
        p.move_up();
        assert_eq!(p.selected(), SettingsItem::Notification(0));
        for _ in 0..20 {
            p.move_down();
        }
        assert_eq!(p.selected(), SettingsItem::Retention);
    }

    #[test]
    fn test_confirm_never_mutates_fixtures() {
        let mut page = mount(Route::Progress);
        let before = progress::milestones();
        if let Page::Progress(p) = &mut page {
            p.milestones.open_edit();
        }
        assert_eq!(
            page.dialog().unwrap().form.value("Milestone Title").as_deref(),
            Some(before[0].title.as_str())
        );
        assert!(page.confirm_dialog().unwrap().is_ok());
        let Page::Progress(p) = &page else {
            panic!("expected progress page");
        };
        assert_eq!(p.milestones.records(), &before[..]);
        assert_eq!(Milestone::edit_title(), "Edit Milestone");
    }
}
