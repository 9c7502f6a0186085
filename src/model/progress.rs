//! Milestones, per-department completion and per-student progress.

use chrono::NaiveDate;

use super::{format_date, ymd};
use crate::resource::{progress_bar, CellValue, Choice, Column, Editable, Field, Form, Record, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn chip(self) -> CellValue {
        match self {
            Self::Completed => CellValue::toned("✓ Completed", Tone::Success),
            Self::InProgress => CellValue::toned("~ In Progress", Tone::Warning),
            Self::Pending => CellValue::toned("! Pending", Tone::Error),
        }
    }
}

pub const MILESTONE_STATUSES: &[Choice] = &[
    Choice::new("pending", "Pending"),
    Choice::new("in-progress", "In Progress"),
    Choice::new("completed", "Completed"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
    pub status: MilestoneStatus,
    pub progress: u8,
    pub assignee: String,
}

const MILESTONE_COLUMNS: &[Column] = &[
    Column::new("Milestone", 22),
    Column::new("Description", 30),
    Column::new("Due Date", 11),
    Column::new("Status", 13),
    Column::new("Progress", 13),
    Column::new("Assigned To", 11),
];

impl Record for Milestone {
    fn noun() -> &'static str {
        "Milestone"
    }

    fn columns() -> &'static [Column] {
        MILESTONE_COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::plain(&self.title),
            CellValue::muted(&self.description),
            CellValue::muted(format_date(self.due)),
            self.status.chip(),
            CellValue::toned(progress_bar(self.progress, 6), Tone::Primary),
            CellValue::muted(&self.assignee),
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Milestone {
    fn form(record: Option<&Self>) -> Form {
        Form::new(vec![
            Field::text("Milestone Title")
                .value(record.map(|r| r.title.clone()).unwrap_or_default())
                .required(),
            Field::multiline("Description")
                .value(record.map(|r| r.description.clone()).unwrap_or_default()),
            Field::date("Due Date", record.map(|r| r.due)),
            Field::select(
                "Status",
                MILESTONE_STATUSES,
                Some(record.map(|r| r.status.as_str()).unwrap_or("pending")),
            ),
            Field::number(
                "Progress (%)",
                record.map(|r| i64::from(r.progress)).unwrap_or(0),
                0,
                Some(100),
            ),
            Field::text("Assigned To")
                .value(record.map(|r| r.assignee.clone()).unwrap_or_default()),
        ])
    }

    fn create_label() -> String {
        "Add Milestone".to_string()
    }

    fn edit_label() -> String {
        "Update Milestone".to_string()
    }

    fn intro(editing: bool) -> Option<String> {
        Some(if editing {
            "Update the milestone details below.".to_string()
        } else {
            "Fill in the details to create a new milestone.".to_string()
        })
    }
}

pub fn milestones() -> Vec<Milestone> {
    use MilestoneStatus::*;
    let m = |id, title: &str, description: &str, due, status, progress, assignee: &str| Milestone {
        id,
        title: title.into(),
        description: description.into(),
        due,
        status,
        progress,
        assignee: assignee.into(),
    };
    vec![
        m(1, "Project Proposal Submission", "Submit initial project proposal with objectives and timeline", ymd(2024, 3, 15), Completed, 100, "John Doe"),
        m(2, "Mid-term Progress Report", "Submit progress report with achievements and challenges", ymd(2024, 4, 1), InProgress, 60, "Jane Smith"),
        m(3, "Final Project Presentation", "Present final project outcomes and deliverables", ymd(2024, 5, 15), Pending, 0, "Mike Johnson"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentProgress {
    pub department: &'static str,
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub at_risk: u32,
}

impl DepartmentProgress {
    /// Completed share of the total, 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total)
        }
    }
}

pub fn department_progress() -> Vec<DepartmentProgress> {
    let d = |department, total, completed, in_progress, at_risk| DepartmentProgress {
        department,
        total,
        completed,
        in_progress,
        at_risk,
    };
    vec![
        d("Computer Science", 120, 85, 30, 5),
        d("Mechanical", 95, 65, 25, 5),
        d("Electrical", 80, 50, 25, 5),
        d("Civil", 70, 45, 20, 5),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    OnTrack,
    AtRisk,
    Completed,
}

impl StudentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::AtRisk => "At Risk",
            Self::Completed => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::OnTrack => Tone::Success,
            Self::AtRisk => Tone::Warning,
            Self::Completed => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProgress {
    /// Student number, e.g. `STU001`.
    pub id: String,
    pub name: String,
    pub department: String,
    pub internship: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub progress: u8,
    pub status: StudentStatus,
}

const STUDENT_COLUMNS: &[Column] = &[
    Column::new("Student ID", 9),
    Column::new("Name", 14),
    Column::new("Department", 15),
    Column::new("Internship", 18),
    Column::new("Duration", 22),
    Column::new("Progress", 12),
    Column::new("Status", 10),
];

impl Record for StudentProgress {
    fn noun() -> &'static str {
        "Student"
    }

    fn columns() -> &'static [Column] {
        STUDENT_COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        let icon = match self.status {
            StudentStatus::AtRisk => "!",
            _ => "✓",
        };
        vec![
            CellValue::muted(&self.id),
            CellValue::plain(&self.name),
            CellValue::plain(&self.department),
            CellValue::plain(&self.internship),
            CellValue::muted(format!("{} - {}", format_date(self.start), format_date(self.end))),
            CellValue::toned(progress_bar(self.progress, 5), self.status.tone()),
            CellValue::toned(format!("{} {}", icon, self.status.as_str()), self.status.tone()),
        ]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }
}

pub fn student_progress() -> Vec<StudentProgress> {
    use StudentStatus::*;
    let s = |id: &str, name: &str, department: &str, internship: &str, start, end, progress, status| StudentProgress {
        id: id.into(),
        name: name.into(),
        department: department.into(),
        internship: internship.into(),
        start,
        end,
        progress,
        status,
    };
    vec![
        s("STU001", "John Doe", "Computer Science", "Web Development", ymd(2023, 1, 15), ymd(2023, 6, 15), 85, OnTrack),
        s("STU002", "Jane Smith", "Mechanical", "Automotive Design", ymd(2023, 2, 1), ymd(2023, 7, 1), 65, OnTrack),
        s("STU003", "Robert Johnson", "Electrical", "Power Systems", ymd(2023, 1, 10), ymd(2023, 6, 10), 45, AtRisk),
        s("STU004", "Emily Davis", "Civil", "Structural Engineering", ymd(2023, 3, 1), ymd(2023, 8, 1), 30, OnTrack),
        s("STU005", "Michael Wilson", "Computer Science", "Data Science", ymd(2023, 2, 15), ymd(2023, 7, 15), 75, OnTrack),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_dialog_wording() {
        assert_eq!(Milestone::create_title(), "Add New Milestone");
        assert_eq!(Milestone::edit_title(), "Edit Milestone");
        assert_eq!(Milestone::edit_label(), "Update Milestone");
        assert_eq!(
            Milestone::intro(true).as_deref(),
            Some("Update the milestone details below.")
        );
    }

    #[test]
    fn test_milestone_defaults() {
        let form = Milestone::form(None);
        assert_eq!(form.value("Status").as_deref(), Some("pending"));
        assert_eq!(form.value("Progress (%)").as_deref(), Some("0"));
    }

    #[test]
    fn test_milestone_prefill() {
        let second = &milestones()[1];
        let mut form = Milestone::form(Some(second));
        assert_eq!(form.value("Status").as_deref(), Some("in-progress"));
        assert_eq!(form.value("Progress (%)").as_deref(), Some("60"));
        assert_eq!(form.value("Due Date").as_deref(), Some("2024-04-01"));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_department_ratio() {
        let cs = department_progress()[0];
        assert!((cs.ratio() - 85.0 / 120.0).abs() < f64::EPSILON);
        let empty = DepartmentProgress {
            department: "None",
            total: 0,
            completed: 0,
            in_progress: 0,
            at_risk: 0,
        };
        assert_eq!(empty.ratio(), 0.0);
    }
}
