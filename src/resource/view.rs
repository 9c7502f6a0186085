use super::dialog::{Dialog, DialogMode, Submission};
use super::form::FormError;
use super::paginator::Paginator;
use super::{Editable, Record};

pub const ALL: &str = "all";

/// Category choices with "all" first.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    options: Vec<String>,
    selected: usize,
}

impl CategoryFilter {
    pub fn new(options: &[&str]) -> Self {
        let mut all = vec![ALL.to_string()];
        all.extend(options.iter().map(|o| o.to_string()));
        Self {
            options: all,
            selected: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.options[self.selected]
    }

    fn accepts(&self, category: Option<&str>) -> bool {
        self.selected == 0 || category == Some(self.current())
    }
}

/// Fixture rows plus the transient UI state of one table.
#[derive(Debug, Clone)]
pub struct ResourceView<T: Record> {
    records: Vec<T>,
    pub paginator: Paginator,
    filter: Option<CategoryFilter>,
    cursor: usize,
    dialog: Option<Dialog>,
}

impl<T: Record> ResourceView<T> {
    pub fn new(records: Vec<T>, paginator: Paginator) -> Self {
        Self {
            records,
            paginator,
            filter: None,
            cursor: 0,
            dialog: None,
        }
    }

    pub fn with_filter(mut self, options: &[&str]) -> Self {
        self.filter = Some(CategoryFilter::new(options));
        self
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_ref()
    }

    fn filtered_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                self.filter
                    .as_ref()
                    .map(|f| f.accepts(r.category()))
                    .unwrap_or(true)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Record indices shown on the current page.
    pub fn page_indices(&self) -> Vec<usize> {
        let filtered = self.filtered_indices();
        let range = self.paginator.range(filtered.len());
        filtered[range].to_vec()
    }

    pub fn page_rows(&self) -> Vec<&T> {
        self.page_indices()
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Row cursor within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.page_indices().get(self.cursor).copied()
    }

    pub fn selected_record(&self) -> Option<&T> {
        self.selected_index().map(|i| &self.records[i])
    }

    pub fn select_next(&mut self) {
        let rows = self.page_indices().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.paginator.next_page(self.filtered_len());
        if moved {
            self.cursor = 0;
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.paginator.prev_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    /// Jump to the first (`false`) or last (`true`) page.
    pub fn jump_page(&mut self, last: bool) {
        if last {
            self.paginator.last_page(self.filtered_len());
        } else {
            self.paginator.first_page();
        }
        self.cursor = 0;
    }

    pub fn cycle_page_size(&mut self) {
        self.paginator.cycle_page_size();
        self.cursor = 0;
    }

    /// Display text of the active filter, `None` when the page has no filter.
    pub fn filter_label(&self) -> Option<String> {
        let filter = self.filter()?;
        Some(if filter.current() == ALL {
            "All".to_string()
        } else {
            T::filter_label(filter.current())
        })
    }

    pub fn page_label(&self) -> String {
        self.paginator.label(self.filtered_len())
    }

    /// Step to the next filter option, wrapping back to "all".
    pub fn cycle_filter(&mut self) {
        if let Some(filter) = self.filter.as_mut() {
            filter.selected = (filter.selected + 1) % filter.options.len();
            self.paginator.first_page();
            self.cursor = 0;
        }
    }

    /// Select a filter option by value. Returns false for unknown values or
    /// pages without a filter.
    pub fn set_filter(&mut self, value: &str) -> bool {
        let Some(filter) = self.filter.as_mut() else {
            return false;
        };
        let Some(idx) = filter.options.iter().position(|o| o == value) else {
            return false;
        };
        filter.selected = idx;
        self.paginator.first_page();
        self.cursor = 0;
        true
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn open_delete(&mut self) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let label = self.records[index].label();
        self.dialog = Some(
            Dialog::confirm(
                format!("Delete {}", T::noun()),
                format!("Are you sure you want to delete \"{}\"?", label),
                "Delete",
                DialogMode::Delete { index },
            )
            .destructive(),
        );
        true
    }

    /// Show a page-specific dialog over this table.
    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn cancel_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    /// Validate and close the open dialog. On a validation error the dialog
    /// stays open with the error attached. Records are never touched.
    pub fn confirm_dialog(&mut self) -> Option<Result<Submission, FormError>> {
        let result = self.dialog.as_mut()?.submit();
        if result.is_ok() {
            self.dialog = None;
        }
        Some(result)
    }
}

impl<T: Editable> ResourceView<T> {
    pub fn open_create(&mut self) {
        let mut dialog = Dialog::form(
            T::create_title(),
            T::form(None),
            T::create_label(),
            DialogMode::Create,
        );
        dialog.intro = T::intro(false);
        self.dialog = Some(dialog);
    }

    /// Open the edit dialog pre-filled from the selected row. Returns false
    /// when the page is empty.
    pub fn open_edit(&mut self) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let mut dialog = Dialog::form(
            T::edit_title(),
            T::form(Some(&self.records[index])),
            T::edit_label(),
            DialogMode::Edit { index },
        );
        dialog.intro = T::intro(true);
        self.dialog = Some(dialog);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{CellValue, Column, Field, Form};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        dept: &'static str,
    }

    impl Record for Row {
        fn noun() -> &'static str {
            "Row"
        }
        fn columns() -> &'static [Column] {
            const COLUMNS: &[Column] = &[Column::new("Name", 50), Column::new("Dept", 50)];
            COLUMNS
        }
        fn cells(&self) -> Vec<CellValue> {
            vec![CellValue::plain(&self.name), CellValue::plain(self.dept)]
        }
        fn label(&self) -> String {
            self.name.clone()
        }
        fn category(&self) -> Option<&str> {
            Some(self.dept)
        }
    }

    impl Editable for Row {
        fn form(record: Option<&Self>) -> Form {
            Form::new(vec![Field::text("Name")
                .value(record.map(|r| r.name.clone()).unwrap_or_default())
                .required()])
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: format!("row{}", i),
                dept: if i % 3 == 0 { "CS" } else { "ME" },
            })
            .collect()
    }

    fn view(n: usize, size: usize) -> ResourceView<Row> {
        ResourceView::new(rows(n), Paginator::new(size).unwrap()).with_filter(&["CS", "ME"])
    }

    #[test]
    fn test_edit_prefills_and_confirm_leaves_records_alone() {
        let mut v = view(12, 5);
        v.next_page();
        v.select_next();
        let before = v.records().to_vec();

        assert!(v.open_edit());
        let dialog = v.dialog().unwrap();
        assert_eq!(dialog.mode, DialogMode::Edit { index: 6 });
        assert_eq!(dialog.form.value("Name").as_deref(), Some("row6"));

        v.dialog_mut().unwrap().form.insert_char('!');
        let sub = v.confirm_dialog().unwrap().unwrap();
        assert_eq!(sub.value("Name"), Some("row6!"));
        assert!(v.dialog().is_none());
        assert_eq!(v.records(), &before[..]);
    }

    #[test]
    fn test_cancel_leaves_records_alone() {
        let mut v = view(3, 5);
        let before = v.records().to_vec();
        v.open_delete();
        assert!(v.dialog().unwrap().destructive);
        v.cancel_dialog();
        assert!(v.dialog().is_none());
        assert_eq!(v.records(), &before[..]);
    }

    #[test]
    fn test_invalid_create_keeps_dialog_open() {
        let mut v = view(3, 5);
        v.open_create();
        assert!(matches!(v.confirm_dialog(), Some(Err(_))));
        assert!(v.dialog().is_some());
        assert_eq!(v.records().len(), 3);
    }

    #[test]
    fn test_filter_then_paginate() {
        let mut v = view(12, 5);
        assert_eq!(v.filtered_len(), 12);
        assert!(v.set_filter("CS"));
        assert_eq!(v.filtered_len(), 4);
        assert!(v.page_rows().iter().all(|r| r.dept == "CS"));
        v.cycle_filter();
        assert_eq!(v.filter().unwrap().current(), "ME");
        assert_eq!(v.filtered_len(), 8);
        v.cycle_filter();
        assert_eq!(v.filter().unwrap().current(), ALL);
        assert!(!v.set_filter("Civil"));
    }

    #[test]
    fn test_filter_resets_page() {
        let mut v = view(12, 5);
        v.next_page();
        v.cycle_filter();
        assert_eq!(v.paginator.page(), 0);
    }

    #[test]
    fn test_last_page_rows() {
        for size in [5, 10, 25] {
            let mut v = view(12, size);
            while v.next_page() {}
            let expected = if 12 % size == 0 { size } else { 12 % size };
            assert_eq!(v.page_rows().len(), expected);
        }
    }

    #[test]
    fn test_cursor_stays_on_page() {
        let mut v = view(7, 5);
        for _ in 0..10 {
            v.select_next();
        }
        assert_eq!(v.cursor(), 4);
        v.next_page();
        assert_eq!(v.cursor(), 0);
        v.select_next();
        v.select_next();
        assert_eq!(v.cursor(), 1);
        assert_eq!(v.selected_record().unwrap().name, "row6");
    }

    #[test]
    fn test_empty_view_has_nothing_to_edit() {
        let mut v = view(0, 5);
        assert!(!v.open_edit());
        assert!(!v.open_delete());
        assert!(v.dialog().is_none());
    }
}
