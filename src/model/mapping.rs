use crate::resource::{CellValue, Choice, Column, Editable, Field, Form, Record, Tone};

/// Outcome framework a mapping ties internships to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// Sustainable Development Goal.
    Sdg,
    /// Program Outcome.
    Po,
    /// Program Educational Objective.
    Peo,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Sdg, Framework::Po, Framework::Peo];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sdg => "sdg",
            Self::Po => "po",
            Self::Peo => "peo",
        }
    }

    pub fn code_label(self) -> &'static str {
        match self {
            Self::Sdg => "SDG",
            Self::Po => "PO",
            Self::Peo => "PEO",
        }
    }

    pub const fn tab_title(self) -> &'static str {
        match self {
            Self::Sdg => "SDG Mapping",
            Self::Po => "PO Mapping",
            Self::Peo => "PEO Mapping",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Field label of the code input, e.g. "SDG Code".
    pub fn code_field(self) -> String {
        format!("{} Code", self.code_label())
    }

    pub fn intro(self) -> String {
        format!(
            "Create a new mapping between internships and {}.",
            self.code_label()
        )
    }
}

pub const FRAMEWORKS: &[Choice] = &[
    Choice::new("sdg", "SDG"),
    Choice::new("po", "PO"),
    Choice::new("peo", "PEO"),
];

pub const TYPE_FIELD: &str = "Mapping Type";
pub const INTERNSHIPS_FIELD: &str = "Select Internships";

pub const MAPPABLE_INTERNSHIPS: &[Choice] = &[
    Choice::new("Web Development Internship", "Web Development Internship"),
    Choice::new("Data Science Internship", "Data Science Internship"),
    Choice::new("AI/ML Internship", "AI/ML Internship"),
    Choice::new("Business Analytics Internship", "Business Analytics Internship"),
    Choice::new("Marketing Internship", "Marketing Internship"),
    Choice::new("Software Engineering Internship", "Software Engineering Internship"),
    Choice::new("Research Internship", "Research Internship"),
    Choice::new("Technical Lead Internship", "Technical Lead Internship"),
    Choice::new("Project Management Internship", "Project Management Internship"),
    Choice::new("Innovation Internship", "Innovation Internship"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: u32,
    pub framework: Framework,
    pub code: String,
    pub description: String,
    pub internships: Vec<String>,
    pub active: bool,
}

const COLUMNS: &[Column] = &[
    Column::new("Code", 10),
    Column::new("Description", 28),
    Column::new("Mapped Internships", 50),
    Column::new("Status", 12),
];

impl Record for Mapping {
    fn noun() -> &'static str {
        "Mapping"
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<CellValue> {
        let status = if self.active {
            CellValue::toned("✓ Active", Tone::Success)
        } else {
            CellValue::toned("! Inactive", Tone::Warning)
        };
        vec![
            CellValue::plain(&self.code),
            CellValue::muted(&self.description),
            CellValue::toned(self.internships.join(", "), Tone::Primary),
            status,
        ]
    }

    fn label(&self) -> String {
        format!("{} {}", self.code, self.description)
    }
}

/// Build the add/edit form for `framework`, pre-filled from `record`.
pub fn mapping_form(framework: Framework, record: Option<&Mapping>) -> Form {
    let chosen: Vec<&str> = record
        .map(|r| r.internships.iter().map(String::as_str).collect())
        .unwrap_or_default();
    Form::new(vec![
        Field::select(TYPE_FIELD, FRAMEWORKS, Some(framework.as_str())),
        Field::text(framework.code_field())
            .value(record.map(|r| r.code.clone()).unwrap_or_default())
            .required(),
        Field::multiline("Description")
            .value(record.map(|r| r.description.clone()).unwrap_or_default()),
        Field::multi_select(INTERNSHIPS_FIELD, MAPPABLE_INTERNSHIPS, &chosen),
    ])
}

/// Relabel the code field after the type select changed. Returns the new
/// framework when a relabel happened.
pub fn sync_code_field(form: &mut Form) -> Option<Framework> {
    let framework = Framework::from_value(&form.value(TYPE_FIELD)?)?;
    let code = form.fields.get_mut(1)?;
    let label = framework.code_field();
    if code.label == label {
        return None;
    }
    code.label = label;
    Some(framework)
}

impl Editable for Mapping {
    fn form(record: Option<&Self>) -> Form {
        mapping_form(record.map(|r| r.framework).unwrap_or(Framework::Sdg), record)
    }

    fn create_label() -> String {
        "Add Mapping".to_string()
    }

    fn intro(editing: bool) -> Option<String> {
        if editing {
            None
        } else {
            Some(Framework::Sdg.intro())
        }
    }
}

fn row(id: u32, framework: Framework, code: &str, description: &str, internships: &[&str]) -> Mapping {
    Mapping {
        id,
        framework,
        code: code.into(),
        description: description.into(),
        internships: internships.iter().map(|s| s.to_string()).collect(),
        active: true,
    }
}

pub fn fixtures(framework: Framework) -> Vec<Mapping> {
    match framework {
        Framework::Sdg => vec![
            row(1, framework, "SDG 4", "Quality Education", &["Web Development Internship", "Data Science Internship"]),
            row(2, framework, "SDG 8", "Decent Work and Economic Growth", &["Business Analytics Internship", "Marketing Internship"]),
        ],
        Framework::Po => vec![
            row(1, framework, "PO 1", "Engineering Knowledge", &["Software Engineering Internship", "AI/ML Internship"]),
            row(2, framework, "PO 2", "Problem Analysis", &["Data Science Internship", "Research Internship"]),
        ],
        Framework::Peo => vec![
            row(1, framework, "PEO 1", "Technical Leadership", &["Technical Lead Internship", "Project Management Internship"]),
            row(2, framework, "PEO 2", "Research and Innovation", &["Research Internship", "Innovation Internship"]),
        ],
    }
}
