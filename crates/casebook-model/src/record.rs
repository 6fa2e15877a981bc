//! Case record types.
//!
//! A [`CaseRecord`] is deserialized once from the source JSON with every
//! default resolved at that point; downstream code reads fully-populated
//! values and never re-applies fallbacks.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A loosely typed identifier carried through from the source JSON.
///
/// Case numbers, field numbers, and ages arrive as JSON numbers or strings
/// depending on the authoring tool. Both forms render verbatim and sort
/// numerically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CaseId {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CaseId {
    /// Numeric value for sorting. Non-numeric text collapses to zero.
    pub fn numeric_or_zero(&self) -> f64 {
        match self {
            CaseId::Integer(value) => *value as f64,
            CaseId::Decimal(value) => *value,
            CaseId::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseId::Integer(value) => write!(f, "{value}"),
            CaseId::Decimal(value) => write!(f, "{value}"),
            CaseId::Text(text) => f.write_str(text),
        }
    }
}

/// Binary gender mapping: only the literal `"male"` selects the male label,
/// every other value (or absence) selects the female label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    Male,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value.as_deref() {
            Some("male") => Gender::Male,
            _ => Gender::Other,
        })
    }
}

/// Section presence: a narrative field counts only when actually non-empty.
/// The text is not trimmed first; whitespace-only content still renders.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

/// One clinical case as authored in the source JSON.
///
/// Unknown fields are ignored; missing fields take the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub case_number: Option<CaseId>,
    pub field_number: Option<CaseId>,
    pub is_designated_disease: bool,
    pub patient_id: String,
    pub is_inpatient: bool,
    pub care_period: String,
    pub age: Option<CaseId>,
    pub gender: Gender,
    pub outcome: String,
    pub chief_complaint: Option<String>,
    pub present_illness: Option<String>,
    pub physical_examination: Option<String>,
    pub laboratory_findings: Option<String>,
    pub differential_diagnoses: Vec<String>,
    pub problem_points: Option<String>,
    pub hospital_course: Option<String>,
    pub family_explanation: Option<String>,
    pub post_discharge_course: Option<String>,
}

impl Default for CaseRecord {
    fn default() -> Self {
        Self {
            case_number: None,
            field_number: None,
            is_designated_disease: false,
            patient_id: String::new(),
            // Records are inpatient cases unless the source says otherwise.
            is_inpatient: true,
            care_period: String::new(),
            age: None,
            gender: Gender::Other,
            outcome: String::new(),
            chief_complaint: None,
            present_illness: None,
            physical_examination: None,
            laboratory_findings: None,
            differential_diagnoses: Vec::new(),
            problem_points: None,
            hospital_course: None,
            family_explanation: None,
            post_discharge_course: None,
        }
    }
}

impl CaseRecord {
    /// Composite sort key for batch output: field number first, then case
    /// number, non-numeric and absent values collapsing to zero.
    pub fn sort_key(&self) -> (f64, f64) {
        (
            self.field_number
                .as_ref()
                .map(CaseId::numeric_or_zero)
                .unwrap_or_default(),
            self.case_number
                .as_ref()
                .map(CaseId::numeric_or_zero)
                .unwrap_or_default(),
        )
    }

    /// Number of clinical sections that will render for this record.
    pub fn section_count(&self) -> usize {
        let text_sections = [
            &self.chief_complaint,
            &self.present_illness,
            &self.physical_examination,
            &self.laboratory_findings,
            &self.problem_points,
            &self.hospital_course,
            &self.family_explanation,
            &self.post_discharge_course,
        ]
        .into_iter()
        .filter(|field| has_text(field.as_deref()))
        .count();
        text_sections + usize::from(!self.differential_diagnoses.is_empty())
    }

    /// Narrative text fields, mutable, for normalization passes. Covers the
    /// eight prose sections plus every differential diagnosis entry;
    /// identifiers and captions are deliberately excluded.
    pub fn narrative_texts_mut(&mut self) -> impl Iterator<Item = &mut String> {
        [
            &mut self.chief_complaint,
            &mut self.present_illness,
            &mut self.physical_examination,
            &mut self.laboratory_findings,
            &mut self.problem_points,
            &mut self.hospital_course,
            &mut self.family_explanation,
            &mut self.post_discharge_course,
        ]
        .into_iter()
        .filter_map(|field| field.as_mut())
        .chain(self.differential_diagnoses.iter_mut())
    }
}

/// Root shape of the input file: one record object or a sequence of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaseInput {
    Many(Vec<CaseRecord>),
    Single(Box<CaseRecord>),
}

impl CaseInput {
    /// True when the source root was a sequence.
    pub fn is_many(&self) -> bool {
        matches!(self, CaseInput::Many(_))
    }

    /// Flatten into a record list regardless of root shape.
    pub fn into_records(self) -> Vec<CaseRecord> {
        match self {
            CaseInput::Many(records) => records,
            CaseInput::Single(record) => vec![*record],
        }
    }
}
