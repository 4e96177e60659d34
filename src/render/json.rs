//! JSON rendering for resume records.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{AccountsIndex, ResumeRecord, WorkExperienceEntry};

use super::NOT_FOUND;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A field value, or the placeholder when the field is absent.
#[derive(Serialize)]
#[serde(untagged)]
enum Slot<T> {
    Found(T),
    Missing(&'static str),
}

impl<T> Slot<T> {
    fn when(found: bool, value: T) -> Self {
        if found {
            Slot::Found(value)
        } else {
            Slot::Missing(NOT_FOUND)
        }
    }
}

/// Outward shape of a record: fixed keys, in this order.
#[derive(Serialize)]
struct Outward<'a> {
    #[serde(rename = "Name")]
    name: Slot<&'a str>,
    #[serde(rename = "Summary")]
    summary: Slot<&'a str>,
    #[serde(rename = "Accounts")]
    accounts: Slot<&'a AccountsIndex>,
    #[serde(rename = "Skills")]
    skills: Slot<&'a [String]>,
    #[serde(rename = "Education")]
    education: Slot<&'a [String]>,
    #[serde(rename = "Certifications")]
    certifications: Slot<&'a [String]>,
    #[serde(rename = "Projects")]
    projects: Slot<&'a [String]>,
    #[serde(rename = "Work Experience")]
    work_experience: Slot<&'a [WorkExperienceEntry]>,
}

impl<'a> From<&'a ResumeRecord> for Outward<'a> {
    fn from(r: &'a ResumeRecord) -> Self {
        let text = |value: &'a Option<String>| match value.as_deref() {
            Some(s) if !s.is_empty() => Slot::Found(s),
            _ => Slot::Missing(NOT_FOUND),
        };
        let list = |items: &'a [String]| Slot::when(!items.is_empty(), items);

        Self {
            name: text(&r.name),
            summary: text(&r.summary),
            accounts: Slot::when(!r.accounts.is_empty(), &r.accounts),
            skills: list(&r.skills),
            education: list(&r.education),
            certifications: list(&r.certifications),
            projects: list(&r.projects),
            work_experience: Slot::when(!r.work_experience.is_empty(), &r.work_experience),
        }
    }
}

/// Convert a record to JSON.
///
/// Keys appear as `Name, Summary, Accounts, Skills, Education,
/// Certifications, Projects, Work Experience`. Absent fields render as the
/// string `"Not found"`.
pub fn to_json(record: &ResumeRecord, format: JsonFormat) -> Result<String> {
    let outward = Outward::from(record);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&outward),
        JsonFormat::Compact => serde_json::to_string(&outward),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
