//! Analytics fixtures for the Reports page.

use crate::resource::{Choice, Field, Form, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentApplications {
    pub department: &'static str,
    pub applications: u32,
    pub accepted: u32,
    pub rejected: u32,
}

impl DepartmentApplications {
    /// Acceptance rate with one decimal, e.g. `"66.7%"`.
    pub fn acceptance_rate(&self) -> String {
        if self.applications == 0 {
            return "0.0%".to_string();
        }
        let rate = f64::from(self.accepted) / f64::from(self.applications) * 100.0;
        format!("{:.1}%", rate)
    }
}

pub fn applications_by_department() -> Vec<DepartmentApplications> {
    let d = |department, applications, accepted, rejected| DepartmentApplications {
        department,
        applications,
        accepted,
        rejected,
    };
    vec![
        d("Computer Science", 45, 30, 15),
        d("Mechanical", 30, 20, 10),
        d("Electrical", 25, 15, 10),
        d("Civil", 20, 12, 8),
    ]
}

/// One slice of a distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u64,
}

impl Slice {
    pub const fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }
}

pub const APPLICATION_STATUS: &[Slice] = &[
    Slice::new("Completed", 35),
    Slice::new("In Progress", 25),
    Slice::new("Pending", 20),
    Slice::new("On Hold", 15),
];

/// Share of `slice` in the whole distribution, rounded to a whole percent.
pub fn share(slices: &[Slice], slice: &Slice) -> u64 {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        0
    } else {
        (slice.value * 100 + total / 2) / total
    }
}

pub const MONTHS: [&str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: &'static str,
    /// One value per entry of `MONTHS`.
    pub values: Vec<u32>,
}

pub fn timeline() -> Vec<Series> {
    vec![
        Series {
            name: "Applications",
            values: vec![10, 15, 20, 25, 30],
        },
        Series {
            name: "Acceptances",
            values: vec![5, 8, 12, 15, 18],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Count,
    Percent,
    Days,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub current: f64,
    pub previous: f64,
    pub unit: Unit,
    pub lower_is_better: bool,
}

impl Metric {
    fn format(&self, value: f64) -> String {
        match self.unit {
            Unit::Count => format!("{}", value),
            Unit::Percent => format!("{}%", value),
            Unit::Days => format!("{} days", value),
        }
    }

    pub fn current_label(&self) -> String {
        self.format(self.current)
    }

    pub fn previous_label(&self) -> String {
        self.format(self.previous)
    }

    /// Percent values change by points; everything else by relative percent.
    pub fn change(&self) -> f64 {
        match self.unit {
            Unit::Percent => self.current - self.previous,
            _ if self.previous == 0.0 => 0.0,
            _ => (self.current - self.previous) / self.previous * 100.0,
        }
    }

    pub fn change_label(&self) -> String {
        let change = self.change().round();
        if change > 0.0 {
            format!("+{}%", change)
        } else {
            format!("{}%", change)
        }
    }

    pub fn change_tone(&self) -> Tone {
        let change = self.change();
        if change == 0.0 {
            Tone::Muted
        } else if (change < 0.0) == self.lower_is_better {
            Tone::Success
        } else {
            Tone::Error
        }
    }
}

pub fn performance_metrics() -> Vec<Metric> {
    vec![
        Metric {
            name: "Total Applications",
            current: 120.0,
            previous: 100.0,
            unit: Unit::Count,
            lower_is_better: false,
        },
        Metric {
            name: "Acceptance Rate",
            current: 65.0,
            previous: 60.0,
            unit: Unit::Percent,
            lower_is_better: false,
        },
        Metric {
            name: "Average Completion Time",
            current: 45.0,
            previous: 50.0,
            unit: Unit::Days,
            lower_is_better: true,
        },
    ]
}

pub const SHARE_TYPES: &[Choice] = &[
    Choice::new("email", "Email"),
    Choice::new("link", "Generate Link"),
    Choice::new("download", "Download PDF"),
];

pub const SHARE_TYPE_FIELD: &str = "Share Type";
pub const RECIPIENTS_FIELD: &str = "Recipients";

pub fn share_form() -> Form {
    Form::new(vec![
        Field::select(SHARE_TYPE_FIELD, SHARE_TYPES, Some("email")),
        Field::email_list(RECIPIENTS_FIELD).placeholder("Enter email addresses separated by commas"),
        Field::multiline("Message").placeholder("Add a message (optional)"),
    ])
}
