use chrono::NaiveDate;

use super::{format_date, title_case, ymd};
use crate::resource::{CellValue, Choice, Column, Editable, Field, Form, Record, Tone};

pub const CATEGORIES: &[Choice] = &[
    Choice::new("deadline", "Deadline"),
    Choice::new("assignment", "Assignment"),
    Choice::new("application", "Application"),
    Choice::new("other", "Other"),
];

pub const RECIPIENTS: &[Choice] = &[
    Choice::new("all", "All Users"),
    Choice::new("students", "All Students"),
    Choice::new("faculty", "Faculty Members"),
    Choice::new("mentors", "Industry Mentors"),
    Choice::new("administrators", "Administrators"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    /// One of the `CATEGORIES` values.
    pub category: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    /// Display label of the recipient group, e.g. "All Students".
    pub recipients: String,
    pub sent: bool,
}

impl Notification {
    pub fn icon(&self) -> (&'static str, Tone) {
        match self.category.as_str() {
            "deadline" => ("◷", Tone::Warning),
            "assignment" => ("◉", Tone::Info),
            "application" => ("▤", Tone::Success),
            _ => ("✉", Tone::Muted),
        }
    }

    /// Map the recipient label back to its select value.
    fn recipient_value(&self) -> Option<&'static str> {
        RECIPIENTS
            .iter()
            .find(|c| c.label == self.recipients)
            .map(|c| c.value)
    }
}

/// Unsent notifications, shown as the header badge.
pub fn pending_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.sent).count()
}

const COLUMNS: &[Column] = &[
    Column::new("", 3),
    Column::new("Title", 25),
    Column::new("Message", 36),
    Column::new("Date", 11),
    Column::new("Recipients", 15),
    Column::new("Status", 10),
];

impl Record for Notification {
    fn noun() -> &'static str {
        "Notification"
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        let (icon, tone) = self.icon();
        let status = if self.sent {
            CellValue::toned("✓ Sent", Tone::Success)
        } else {
            CellValue::toned("! Pending", Tone::Warning)
        };
        vec![
            CellValue::toned(icon, tone),
            CellValue::plain(&self.title),
            CellValue::muted(&self.body),
            CellValue::muted(format_date(self.date)),
            CellValue::muted(&self.recipients),
            status,
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn filter_label(value: &str) -> String {
        category_label(value)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Editable for Notification {
    fn form(record: Option<&Self>) -> Form {
        Form::new(vec![
            Field::select(
                "Notification Type",
                CATEGORIES,
                Some(record.map(|r| r.category.as_str()).unwrap_or("deadline")),
            ),
            Field::text("Title")
                .value(record.map(|r| r.title.clone()).unwrap_or_default())
                .required(),
            Field::multiline("Message")
                .value(record.map(|r| r.body.clone()).unwrap_or_default())
                .required(),
            Field::select(
                "Recipients",
                RECIPIENTS,
                Some(record.and_then(Notification::recipient_value).unwrap_or("all")),
            ),
        ])
    }

    fn create_title() -> String {
        "Send New Notification".to_string()
    }

    fn create_label() -> String {
        "Send".to_string()
    }

    fn intro(editing: bool) -> Option<String> {
        if editing {
            None
        } else {
            Some("Create and send a new notification to users.".to_string())
        }
    }
}

/// Filter label, e.g. "Deadline".
pub fn category_label(value: &str) -> String {
    CATEGORIES
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| title_case(value))
}

fn row(id: u32, category: &str, title: &str, body: &str, date: NaiveDate, recipients: &str, sent: bool) -> Notification {
    Notification {
        id,
        category: category.into(),
        title: title.into(),
        body: body.into(),
        date,
        recipients: recipients.into(),
        sent,
    }
}

pub fn fixtures() -> Vec<Notification> {
    vec![
        row(
            1,
            "deadline",
            "Internship Application Deadline",
            "The deadline for submitting internship applications for the summer semester is approaching.",
            ymd(2023, 5, 15),
            "All Students",
            false,
        ),
        row(
            2,
            "assignment",
            "Faculty Mentor Assignment",
            "New faculty mentor assignments have been made for the upcoming semester.",
            ymd(2023, 5, 10),
            "Faculty Members",
            true,
        ),
        row(
            3,
            "application",
            "New Internship Application",
            "A new internship application has been submitted and requires review.",
            ymd(2023, 5, 8),
            "Administrators",
            false,
        ),
        row(
            4,
            "deadline",
            "Progress Report Submission",
            "Students are required to submit their progress reports by the end of this week.",
            ymd(2023, 5, 5),
            "All Students",
            true,
        ),
        row(
            5,
            "assignment",
            "Industry Mentor Assignment",
            "Industry mentors have been assigned to students for the current semester.",
            ymd(2023, 5, 1),
            "Industry Mentors",
            true,
        ),
    ]
}
