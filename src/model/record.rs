//! The structured record extracted from one resume.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Sections;

/// Fields of a [`ResumeRecord`], in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Summary,
    Accounts,
    Skills,
    Education,
    Certifications,
    Projects,
    WorkExperience,
}

impl Field {
    /// Every field in output order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Summary,
        Field::Accounts,
        Field::Skills,
        Field::Education,
        Field::Certifications,
        Field::Projects,
        Field::WorkExperience,
    ];

    /// Key used for this field in the rendered record.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Summary => "Summary",
            Field::Accounts => "Accounts",
            Field::Skills => "Skills",
            Field::Education => "Education",
            Field::Certifications => "Certifications",
            Field::Projects => "Projects",
            Field::WorkExperience => "Work Experience",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One job recovered from a work-experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    /// Job title
    pub title: Option<String>,
    /// Employer
    pub company: Option<String>,
    /// Date line as written (e.g., "01/2020 - Present")
    pub dates: Option<String>,
    /// Responsibility lines in document order
    pub responsibilities: Vec<String>,
}

impl WorkExperienceEntry {
    /// Whether a non-empty title has been recovered.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether a non-empty company has been recovered.
    pub fn has_company(&self) -> bool {
        self.company.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// URLs and emails grouped by domain token, in first-seen order.
///
/// Keys are never empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl AccountsIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `matched` under `key`. Returns false (and stores nothing) for an empty key.
    pub fn push(&mut self, key: &str, matched: impl Into<String>) -> bool {
        if key.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(matched.into()),
            None => self.entries.push((key.to_string(), vec![matched.into()])),
        }
        true
    }

    /// Matches recorded under `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Iterate `(key, matches)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AccountsIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AccountsIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = AccountsIndex;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of domain token to matched strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut index = AccountsIndex::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    for value in values {
                        index.push(&key, value);
                    }
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

/// Structured fields extracted from one resume.
///
/// Absence is explicit: `None` for scalar fields and an empty container
/// otherwise. The `"Not found"` placeholder is only produced when rendering
/// (see [`render::to_json`](crate::render::to_json)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name
    pub name: Option<String>,
    /// Summary or objective statement
    pub summary: Option<String>,
    /// Contact URLs and emails by domain token
    pub accounts: AccountsIndex,
    /// Skill lines
    pub skills: Vec<String>,
    /// Education lines
    pub education: Vec<String>,
    /// Certification lines
    pub certifications: Vec<String>,
    /// Project lines
    pub projects: Vec<String>,
    /// Jobs, in document order
    pub work_experience: Vec<WorkExperienceEntry>,
}

impl ResumeRecord {
    /// Check whether a field carries a value.
    pub fn is_found(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.is_some(),
            Field::Summary => self.summary.is_some(),
            Field::Accounts => !self.accounts.is_empty(),
            Field::Skills => !self.skills.is_empty(),
            Field::Education => !self.education.is_empty(),
            Field::Certifications => !self.certifications.is_empty(),
            Field::Projects => !self.projects.is_empty(),
            Field::WorkExperience => !self.work_experience.is_empty(),
        }
    }

    /// Fields that carry no value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.is_found(*f))
            .collect()
    }
}

/// Everything produced by one parse: the record plus the intermediate views
/// it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume {
    /// The extracted record
    pub record: ResumeRecord,
    /// Sections found by the layout segmenter
    pub sections: Sections,
    /// Linear text as returned by the text collaborator
    pub text: String,
}

impl ParsedResume {
    /// Render the record as JSON.
    pub fn to_json(&self, format: crate::render::JsonFormat) -> crate::Result<String> {
        crate::render::to_json(&self.record, format)
    }

    /// Render the record as a plain-text report.
    pub fn to_text(&self) -> String {
        crate::render::to_text(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_in_order() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "Name",
                "Summary",
                "Accounts",
                "Skills",
                "Education",
                "Certifications",
                "Projects",
                "Work Experience"
            ]
        );
    }

    #[test]
    fn test_accounts_index_rejects_empty_key() {
        let mut index = AccountsIndex::new();
        assert!(!index.push("", "a@.b.com"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_accounts_index_keeps_first_seen_order() {
        let mut index = AccountsIndex::new();
        index.push("github", "github.com/jdoe");
        index.push("gmail", "jdoe@gmail.com");
        index.push("github", "https://github.com/jdoe/site");

        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["github", "gmail"]);
        assert_eq!(
            index.get("github").unwrap(),
            &["github.com/jdoe".to_string(), "https://github.com/jdoe/site".to_string()]
        );
    }

    #[test]
    fn test_accounts_index_serializes_as_map() {
        let mut index = AccountsIndex::new();
        index.push("linkedin", "linkedin.com/in/jdoe");
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"linkedin":["linkedin.com/in/jdoe"]}"#);

        let back: AccountsIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_entry_title_presence() {
        let mut entry = WorkExperienceEntry::default();
        assert!(!entry.has_title());
        entry.title = Some(String::new());
        assert!(!entry.has_title());
        entry.title = Some("Engineer".into());
        assert!(entry.has_title());
    }

    #[test]
    fn test_missing_fields() {
        let record = ResumeRecord {
            name: Some("Jane Doe".into()),
            skills: vec!["Rust".into()],
            ..Default::default()
        };
        let missing = record.missing_fields();
        assert!(!missing.contains(&Field::Name));
        assert!(!missing.contains(&Field::Skills));
        assert!(missing.contains(&Field::WorkExperience));
        assert_eq!(missing.len(), 6);
    }
}
