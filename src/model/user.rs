use super::DEPARTMENTS;
use crate::resource::{CellValue, Choice, Column, Editable, Field, Form, Record, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Admin => Tone::Error,
            Self::Faculty => Tone::Primary,
            Self::Student => Tone::Success,
        }
    }
}

pub const ROLES: &[Choice] = &[
    Choice::new("admin", "Admin"),
    Choice::new("faculty", "Faculty"),
    Choice::new("student", "Student"),
];

pub const STATUSES: &[Choice] = &[
    Choice::new("active", "Active"),
    Choice::new("inactive", "Inactive"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub active: bool,
}

impl User {
    pub fn status(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

const COLUMNS: &[Column] = &[
    Column::new("User", 22),
    Column::new("Email", 32),
    Column::new("Role", 12),
    Column::new("Department", 20),
    Column::new("Status", 12),
];

impl Record for User {
    fn noun() -> &'static str {
        "User"
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        let status_tone = if self.active { Tone::Success } else { Tone::Error };
        vec![
            CellValue::plain(format!("◉ {}", self.name)),
            CellValue::muted(&self.email),
            CellValue::toned(self.role.as_str(), self.role.tone()),
            CellValue::plain(&self.department),
            CellValue::toned(self.status(), status_tone),
        ]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(self.role.as_str())
    }
}

impl Editable for User {
    fn form(record: Option<&Self>) -> Form {
        Form::new(vec![
            Field::text("Name")
                .value(record.map(|r| r.name.clone()).unwrap_or_default())
                .required(),
            Field::email("Email")
                .value(record.map(|r| r.email.clone()).unwrap_or_default())
                .required(),
            Field::select("Role", ROLES, record.map(|r| r.role.as_str())).required(),
            Field::select(
                "Department",
                DEPARTMENTS,
                record.map(|r| r.department.as_str()),
            ),
            Field::select("Status", STATUSES, record.map(|r| r.status())),
        ])
    }
}

fn row(id: u32, name: &str, email: &str, role: Role, department: &str, active: bool) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        role,
        department: department.into(),
        active,
    }
}

pub fn fixtures() -> Vec<User> {
    use Role::*;
    vec![
        row(1, "John Doe", "john.doe@university.edu", Faculty, "Computer Science", true),
        row(2, "Jane Smith", "jane.smith@university.edu", Student, "Mechanical", true),
        row(3, "Alice Brown", "alice.brown@university.edu", Admin, "Computer Science", true),
        row(4, "Robert Johnson", "robert.johnson@university.edu", Student, "Electrical", true),
        row(5, "Emily Davis", "emily.davis@university.edu", Student, "Civil", true),
        row(6, "Michael Wilson", "michael.wilson@university.edu", Student, "Computer Science", true),
        row(7, "Sarah Lee", "sarah.lee@university.edu", Faculty, "Electrical", true),
        row(8, "David Kim", "david.kim@university.edu", Faculty, "Civil", false),
        row(9, "Laura Chen", "laura.chen@university.edu", Student, "Mechanical", false),
        row(10, "Mike Johnson", "mike.johnson@university.edu", Student, "Electrical", true),
        row(11, "Priya Patel", "priya.patel@university.edu", Faculty, "Mechanical", true),
        row(12, "Tom Garcia", "tom.garcia@university.edu", Admin, "Civil", true),
    ]
}
