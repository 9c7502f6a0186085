//! Generic list / filter / paginate / edit scaffolding shared by every table
//! page.
//!
//! A page supplies its record type through [`Record`] and gets a
//! [`ResourceView`] that owns the fixture rows, the paginator, an optional
//! category filter, the row cursor and the open dialog.

pub mod dialog;
pub mod form;
pub mod paginator;
pub mod view;

pub use dialog::{Dialog, DialogMode, Submission};
pub use form::{Choice, Field, Form, FormError};
pub use paginator::Paginator;
pub use view::ResourceView;

/// Semantic colour role of a cell. The UI maps tones onto theme styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Muted,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellValue {
    pub text: String,
    pub tone: Tone,
}

impl CellValue {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Muted,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Table column header with its share of the table width (percent).
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

pub trait Record {
    /// Singular display name, e.g. `"Internship"`.
    fn noun() -> &'static str;

    fn columns() -> &'static [Column];

    /// One cell per column, in column order.
    fn cells(&self) -> Vec<CellValue>;

    /// Short name used in delete prompts.
    fn label(&self) -> String;

    /// Value matched by the page's category filter.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Display text for a filter value.
    fn filter_label(value: &str) -> String {
        value.to_string()
    }
}

/// Records that can be opened in a create/edit dialog.
pub trait Editable: Record {
    /// Dialog form, pre-filled from `record` when editing.
    fn form(record: Option<&Self>) -> Form;

    fn create_title() -> String {
        format!("Add New {}", Self::noun())
    }

    fn edit_title() -> String {
        format!("Edit {}", Self::noun())
    }

    fn create_label() -> String {
        "Create".to_string()
    }

    fn edit_label() -> String {
        "Update".to_string()
    }

    fn intro(_editing: bool) -> Option<String> {
        None
    }
}

/// Text progress bar such as `██████░░░░ 60%`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let pct = percent.min(100) as usize;
    let filled = (pct * width + 50) / 100;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░ 0%");
        assert_eq!(progress_bar(60, 10), "██████░░░░ 60%");
        assert_eq!(progress_bar(100, 4), "████ 100%");
        assert_eq!(progress_bar(250, 4), "████ 100%");
    }
}
