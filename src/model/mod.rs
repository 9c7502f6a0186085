//! Record types and the literal sample data each page mounts.
//!
//! Nothing here is persisted. Every page builds its rows from these
//! fixture functions when it is mounted and drops them when the user
//! navigates away.

pub mod dashboard;
pub mod internship;
pub mod mapping;
pub mod notification;
pub mod progress;
pub mod report;
pub mod settings;
pub mod user;

use chrono::NaiveDate;

use crate::resource::form::DATE_FORMAT;
use crate::resource::Choice;

pub const DEPARTMENTS: &[Choice] = &[
    Choice::new("Computer Science", "Computer Science"),
    Choice::new("Mechanical", "Mechanical"),
    Choice::new("Electrical", "Electrical"),
    Choice::new("Civil", "Civil"),
];

pub fn department_names() -> Vec<&'static str> {
    DEPARTMENTS.iter().map(|c| c.value).collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Capitalise the first letter, e.g. `"pending"` to `"Pending"`.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("pending"), "Pending");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("élan"), "Élan");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2024, 5, 1)), "2024-05-01");
    }
}
