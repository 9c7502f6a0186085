use chrono::NaiveDate;

use super::{format_date, ymd, DEPARTMENTS};
use crate::resource::{CellValue, Choice, Column, Editable, Field, Form, Record, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternshipStatus {
    Active,
    Pending,
    Closed,
}

impl InternshipStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Closed => "closed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Pending => Tone::Warning,
            Self::Closed => Tone::Error,
        }
    }
}

pub const STATUSES: &[Choice] = &[
    Choice::new("active", "Active"),
    Choice::new("pending", "Pending"),
    Choice::new("closed", "Closed"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Internship {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub department: String,
    pub status: InternshipStatus,
    /// Sustainable development goal tags, e.g. `SDG 4`.
    pub goals: Vec<String>,
    pub applications: u32,
    pub deadline: NaiveDate,
}

const COLUMNS: &[Column] = &[
    Column::new("Title", 24),
    Column::new("Company", 15),
    Column::new("Department", 16),
    Column::new("Status", 9),
    Column::new("SDGs", 13),
    Column::new("Applications", 11),
    Column::new("Deadline", 12),
];

impl Record for Internship {
    fn noun() -> &'static str {
        "Internship"
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::plain(&self.title),
            CellValue::plain(&self.company),
            CellValue::plain(&self.department),
            CellValue::toned(self.status.as_str(), self.status.tone()),
            CellValue::toned(self.goals.join(" "), Tone::Info),
            CellValue::plain(self.applications.to_string()),
            CellValue::muted(format_date(self.deadline)),
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Editable for Internship {
    fn form(record: Option<&Self>) -> Form {
        Form::new(vec![
            Field::text("Title")
                .value(record.map(|r| r.title.clone()).unwrap_or_default())
                .required(),
            Field::text("Company")
                .value(record.map(|r| r.company.clone()).unwrap_or_default())
                .required(),
            Field::select(
                "Department",
                DEPARTMENTS,
                record.map(|r| r.department.as_str()),
            )
            .required(),
            Field::select("Status", STATUSES, record.map(|r| r.status.as_str())).required(),
            Field::multiline("Description"),
            Field::date("Deadline", record.map(|r| r.deadline)),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    id: u32,
    title: &str,
    company: &str,
    department: &str,
    status: InternshipStatus,
    goals: &[&str],
    applications: u32,
    deadline: NaiveDate,
) -> Internship {
    Internship {
        id,
        title: title.into(),
        company: company.into(),
        department: department.into(),
        status,
        goals: goals.iter().map(|g| g.to_string()).collect(),
        applications,
        deadline,
    }
}

pub fn fixtures() -> Vec<Internship> {
    use InternshipStatus::*;
    vec![
        row(1, "Software Development Intern", "Tech Corp", "Computer Science", Active, &["SDG 4", "SDG 8"], 25, ymd(2024, 5, 1)),
        row(2, "Mechanical Engineering Intern", "Auto Industries", "Mechanical", Pending, &["SDG 9"], 15, ymd(2024, 4, 15)),
        row(3, "Data Science Intern", "Insight Labs", "Computer Science", Active, &["SDG 4", "SDG 9"], 31, ymd(2024, 5, 10)),
        row(4, "Power Systems Intern", "GridWorks", "Electrical", Active, &["SDG 7"], 12, ymd(2024, 4, 30)),
        row(5, "Structural Design Intern", "BuildRight", "Civil", Pending, &["SDG 11"], 9, ymd(2024, 5, 20)),
        row(6, "Embedded Firmware Intern", "Circuit Co", "Electrical", Closed, &["SDG 9"], 18, ymd(2024, 3, 1)),
        row(7, "Web Development Intern", "Pixel Studio", "Computer Science", Active, &["SDG 8"], 40, ymd(2024, 5, 5)),
        row(8, "Manufacturing Intern", "Precision Parts", "Mechanical", Active, &["SDG 9", "SDG 12"], 11, ymd(2024, 6, 1)),
        row(9, "Urban Planning Intern", "City Council", "Civil", Active, &["SDG 11"], 7, ymd(2024, 6, 15)),
        row(10, "Renewable Energy Intern", "SunPeak", "Electrical", Pending, &["SDG 7", "SDG 13"], 22, ymd(2024, 5, 25)),
        row(11, "Robotics Intern", "Automata", "Mechanical", Closed, &["SDG 9"], 19, ymd(2024, 2, 28)),
        row(12, "Water Resources Intern", "AquaFlow", "Civil", Active, &["SDG 6"], 6, ymd(2024, 6, 30)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_match_columns() {
        for internship in fixtures() {
            assert_eq!(internship.cells().len(), Internship::columns().len());
        }
    }

    #[test]
    fn test_edit_form_prefill() {
        let first = &fixtures()[0];
        let form = Internship::form(Some(first));
        assert_eq!(form.value("Title").as_deref(), Some("Software Development Intern"));
        assert_eq!(form.value("Company").as_deref(), Some("Tech Corp"));
        assert_eq!(form.value("Department").as_deref(), Some("Computer Science"));
        assert_eq!(form.value("Status").as_deref(), Some("active"));
        assert_eq!(form.value("Deadline").as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_blank_form() {
        let mut form = Internship::form(None);
        assert_eq!(form.value("Title").as_deref(), Some(""));
        assert!(form.validate().is_err());
    }
}
