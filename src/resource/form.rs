//! Dialog form fields: drafts, focus movement and validation.
//!
//! A form is only ever a draft. Its values are read back out as a
//! `Submission`; nothing here writes to a record.

use crate::input::InputState;
use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: String },
    #[error("{field} must be a date like 2024-05-01 (got \"{value}\")")]
    InvalidDate { field: String, value: String },
    #[error("{field} must be an email address (got \"{value}\")")]
    InvalidEmail { field: String, value: String },
    #[error("{field} must be a whole number")]
    NotANumber { field: String },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },
}

/// One option of a select or multi-select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Multiline,
    Email,
    /// Comma-separated email addresses.
    EmailList,
    Date,
    Number { min: i64, max: Option<i64> },
    Select {
        options: Vec<Choice>,
        selected: Option<usize>,
    },
    MultiSelect {
        options: Vec<Choice>,
        chosen: Vec<bool>,
        cursor: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: String,
    pub kind: FieldKind,
    pub input: InputState,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl Field {
    fn with_kind(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
            input: InputState::new(),
            required: false,
            placeholder: None,
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Text)
    }

    pub fn multiline(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Multiline)
    }

    pub fn email(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Email)
    }

    pub fn email_list(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::EmailList)
    }

    pub fn date(label: impl Into<String>, value: Option<NaiveDate>) -> Self {
        let mut field = Self::with_kind(label, FieldKind::Date);
        if let Some(d) = value {
            field.input = InputState::with_text(d.format(DATE_FORMAT).to_string());
        }
        field.placeholder = Some("YYYY-MM-DD");
        field
    }

    pub fn number(label: impl Into<String>, value: i64, min: i64, max: Option<i64>) -> Self {
        let mut field = Self::with_kind(label, FieldKind::Number { min, max });
        field.input = InputState::with_text(value.to_string());
        field
    }

    /// A select pre-set to the option whose value is `selected` (if any).
    pub fn select(label: impl Into<String>, options: &[Choice], selected: Option<&str>) -> Self {
        let selected = selected.and_then(|v| options.iter().position(|c| c.value == v));
        Self::with_kind(
            label,
            FieldKind::Select {
                options: options.to_vec(),
                selected,
            },
        )
    }

    pub fn multi_select(label: impl Into<String>, options: &[Choice], chosen: &[&str]) -> Self {
        let flags = options.iter().map(|c| chosen.contains(&c.value)).collect();
        Self::with_kind(
            label,
            FieldKind::MultiSelect {
                options: options.to_vec(),
                chosen: flags,
                cursor: 0,
            },
        )
    }

    /// Pre-fill a text-like field.
    pub fn value(mut self, text: impl Into<String>) -> Self {
        self.input = InputState::with_text(text);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn is_text(&self) -> bool {
        !matches!(
            self.kind,
            FieldKind::Select { .. } | FieldKind::MultiSelect { .. }
        )
    }

    /// The submitted value: trimmed text, the option value of a select, or
    /// the chosen option values of a multi-select joined with `, `.
    pub fn current_value(&self) -> String {
        match &self.kind {
            FieldKind::Select { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|c| c.value.to_string())
                .unwrap_or_default(),
            FieldKind::MultiSelect {
                options, chosen, ..
            } => options
                .iter()
                .zip(chosen)
                .filter(|(_, on)| **on)
                .map(|(c, _)| c.value)
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.input.text.trim().to_string(),
        }
    }

    /// Label of the selected option, for selects.
    pub fn selected_label(&self) -> Option<&'static str> {
        match &self.kind {
            FieldKind::Select { options, selected } => {
                selected.and_then(|i| options.get(i)).map(|c| c.label)
            }
            _ => None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        match &mut self.kind {
            FieldKind::Select { options, selected } if !options.is_empty() => {
                let len = options.len();
                *selected = Some(match (*selected, forward) {
                    (None, true) => 0,
                    (None, false) => len - 1,
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                });
            }
            FieldKind::MultiSelect {
                options, cursor, ..
            } if !options.is_empty() => {
                let len = options.len();
                *cursor = if forward {
                    (*cursor + 1) % len
                } else {
                    (*cursor + len - 1) % len
                };
            }
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let value = self.current_value();
        if value.is_empty() {
            return if self.required {
                Err(FormError::Required {
                    field: self.label.clone(),
                })
            } else {
                Ok(())
            };
        }

        match &self.kind {
            FieldKind::Date => {
                NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| {
                    FormError::InvalidDate {
                        field: self.label.clone(),
                        value: value.clone(),
                    }
                })?;
            }
            FieldKind::Email => {
                if !looks_like_email(&value) {
                    return Err(FormError::InvalidEmail {
                        field: self.label.clone(),
                        value,
                    });
                }
            }
            FieldKind::EmailList => {
                for addr in value.split(',').map(str::trim).filter(|a| !a.is_empty()) {
                    if !looks_like_email(addr) {
                        return Err(FormError::InvalidEmail {
                            field: self.label.clone(),
                            value: addr.to_string(),
                        });
                    }
                }
            }
            FieldKind::Number { min, max } => {
                let n: i64 = value.parse().map_err(|_| FormError::NotANumber {
                    field: self.label.clone(),
                })?;
                match max {
                    Some(max) if n < *min || n > *max => {
                        return Err(FormError::OutOfRange {
                            field: self.label.clone(),
                            min: *min,
                            max: *max,
                        });
                    }
                    None if n < *min => {
                        return Err(FormError::BelowMinimum {
                            field: self.label.clone(),
                            min: *min,
                        });
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Cheap shape check: one `@`, a non-empty local part, and a dotted domain.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focused: usize,
    pub error: Option<FormError>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focused)
    }

    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }

    pub fn field_mut(&mut self, label: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.label == label)
    }

    pub fn value(&self, label: &str) -> Option<String> {
        self.field(label).map(Field::current_value)
    }

    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.label.clone(), f.current_value()))
            .collect()
    }

    /// Type into the focused field. Space toggles a multi-select option;
    /// number fields only accept digits and a leading minus.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        match &mut field.kind {
            FieldKind::Select { .. } => {}
            FieldKind::MultiSelect {
                chosen, cursor, ..
            } => {
                if c == ' ' {
                    if let Some(flag) = chosen.get_mut(*cursor) {
                        *flag = !*flag;
                    }
                }
            }
            FieldKind::Number { .. } => {
                if c.is_ascii_digit() || (c == '-' && field.input.cursor == 0) {
                    field.input.insert_char(c);
                }
            }
            _ => field.input.insert_char(c),
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            if field.is_text() {
                field.input.delete_back();
            }
        }
        self.error = None;
    }

    pub fn delete(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            if field.is_text() {
                field.input.delete_forward();
            }
        }
    }

    pub fn left(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            if field.is_text() {
                field.input.move_left();
            } else {
                field.cycle(false);
            }
        }
    }

    pub fn right(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            if field.is_text() {
                field.input.move_right();
            } else {
                field.cycle(true);
            }
        }
    }

    /// Check every field, remembering the first failure for display.
    pub fn validate(&mut self) -> Result<(), FormError> {
        let result = self.fields.iter().try_for_each(Field::validate);
        self.error = result.as_ref().err().cloned();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPARTMENTS: &[Choice] = &[
        Choice::new("Computer Science", "Computer Science"),
        Choice::new("Mechanical", "Mechanical"),
    ];

    #[test]
    fn test_select_cycles_from_unset() {
        let mut form = Form::new(vec![Field::select("Department", DEPARTMENTS, None)]);
        assert_eq!(form.value("Department").as_deref(), Some(""));
        form.right();
        assert_eq!(form.value("Department").as_deref(), Some("Computer Science"));
        form.right();
        form.right();
        assert_eq!(form.value("Department").as_deref(), Some("Computer Science"));
        form.left();
        assert_eq!(form.value("Department").as_deref(), Some("Mechanical"));
    }

    #[test]
    fn test_multi_select_toggle() {
        let mut form = Form::new(vec![Field::multi_select(
            "Internships",
            DEPARTMENTS,
            &["Mechanical"],
        )]);
        form.insert_char(' ');
        assert_eq!(
            form.value("Internships").as_deref(),
            Some("Computer Science, Mechanical")
        );
        form.right();
        form.insert_char(' ');
        assert_eq!(form.value("Internships").as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_required_field() {
        let mut form = Form::new(vec![Field::text("Title").required()]);
        assert_eq!(
            form.validate(),
            Err(FormError::Required {
                field: "Title".into()
            })
        );
        assert!(form.error.is_some());
        form.insert_char('x');
        assert!(form.error.is_none());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_date_validation() {
        let mut form = Form::new(vec![Field::date("Deadline", None).value("2024-13-01")]);
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidDate { .. })
        ));
        form.fields[0].input = InputState::with_text("2024-05-01");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_number_range_and_digits_only() {
        let mut form = Form::new(vec![Field::number("Progress (%)", 60, 0, Some(100))]);
        form.insert_char('a');
        assert_eq!(form.value("Progress (%)").as_deref(), Some("60"));
        form.insert_char('0');
        assert_eq!(
            form.validate(),
            Err(FormError::OutOfRange {
                field: "Progress (%)".into(),
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn test_email_checks() {
        assert!(looks_like_email("john.doe@university.edu"));
        assert!(!looks_like_email("john.doe"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a b@c.d"));

        let mut form =
            Form::new(vec![Field::email_list("Recipients").value("a@x.org, nope")]);
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail {
                field: "Recipients".into(),
                value: "nope".into()
            })
        );
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::new(vec![Field::text("A"), Field::text("B")]);
        form.focus_prev();
        assert_eq!(form.focused, 1);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }
}
