use super::form::{Form, FormError};

/// What a dialog was opened for. Only used for wording and logging; no mode
/// writes back to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { index: usize },
    Delete { index: usize },
    /// A page-level action (send, share, backup, ...).
    Action,
}

/// Overlay form or confirmation prompt.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub title: String,
    pub intro: Option<String>,
    pub form: Form,
    pub confirm_label: String,
    pub destructive: bool,
    pub mode: DialogMode,
}

/// Draft values handed back when a dialog is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub action: String,
    pub mode: DialogMode,
    pub values: Vec<(String, String)>,
}

impl Submission {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl Dialog {
    pub fn form(title: impl Into<String>, form: Form, confirm_label: impl Into<String>, mode: DialogMode) -> Self {
        Self {
            title: title.into(),
            intro: None,
            form,
            confirm_label: confirm_label.into(),
            destructive: false,
            mode,
        }
    }

    /// A yes/no prompt with no fields.
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        mode: DialogMode,
    ) -> Self {
        Self {
            title: title.into(),
            intro: Some(message.into()),
            form: Form::default(),
            confirm_label: confirm_label.into(),
            destructive: false,
            mode,
        }
    }

    pub fn intro(mut self, text: impl Into<String>) -> Self {
        self.intro = Some(text.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    /// Validate the form and produce the draft values.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        self.form.validate()?;
        Ok(Submission {
            title: self.title.clone(),
            action: self.confirm_label.clone(),
            mode: self.mode,
            values: self.form.values(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::form::Field;

    #[test]
    fn test_confirm_dialog_always_submits() {
        let mut dialog = Dialog::confirm(
            "Backup Data",
            "Create a backup?",
            "Backup",
            DialogMode::Action,
        );
        let sub = dialog.submit().unwrap();
        assert_eq!(sub.action, "Backup");
        assert!(sub.values.is_empty());
    }

    #[test]
    fn test_submit_reports_first_error() {
        let form = Form::new(vec![
            Field::text("Name").required(),
            Field::email("Email").value("bad"),
        ]);
        let mut dialog = Dialog::form("Add New User", form, "Create", DialogMode::Create);
        assert!(matches!(dialog.submit(), Err(FormError::Required { .. })));
        assert!(dialog.form.error.is_some());
    }
}
