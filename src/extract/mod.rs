//! Field extraction over linear text and segmented sections.
//!
//! Every extractor is a pure function of its inputs plus the compiled
//! [`Patterns`]. [`FieldExtractor`] runs them all and assembles a
//! [`ResumeRecord`]. A panic inside one extractor leaves only that field
//! absent.

mod accounts;
mod experience;
mod keyword;
mod name;
mod patterns;
mod segment;
mod summary;

use std::panic::{catch_unwind, AssertUnwindSafe};

pub use accounts::extract_accounts;
pub use experience::{
    classify, extract_work_experience, RuleKind, HEADLINE_SIZE, MIN_RESPONSIBILITY_WORDS,
};
pub use keyword::{extract_keyword_field, KeywordField};
pub use name::extract_name;
pub use patterns::{
    Patterns, CERTIFICATION_KEYWORDS, EDUCATION_KEYWORDS, PROJECT_KEYWORDS, SKILLS_KEYWORDS,
    SUMMARY_TITLES, WORK_EXPERIENCE_KEYWORDS,
};
pub use segment::segment;
pub use summary::extract_summary;

use crate::model::{Field, PositionedSpan, ResumeRecord, Sections};

/// Runs every field extractor with one shared set of compiled patterns.
///
/// Reuse one instance across many documents; it holds no per-document state.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    patterns: Patterns,
}

impl FieldExtractor {
    /// Create an extractor, compiling all patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled patterns.
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Group spans into sections.
    pub fn segment(&self, spans: &[PositionedSpan]) -> Sections {
        segment(&self.patterns, spans)
    }

    /// Extract every field from linear text and sections.
    pub fn extract(&self, text: &str, sections: &Sections) -> ResumeRecord {
        let p = &self.patterns;
        let keyword = |field, kind| isolate(field, || extract_keyword_field(p, sections, kind));

        ResumeRecord {
            name: isolate(Field::Name, || extract_name(p, text)),
            summary: isolate(Field::Summary, || extract_summary(p, text)),
            accounts: isolate(Field::Accounts, || extract_accounts(p, text)),
            skills: keyword(Field::Skills, KeywordField::Skills),
            education: keyword(Field::Education, KeywordField::Education),
            certifications: keyword(Field::Certifications, KeywordField::Certifications),
            projects: keyword(Field::Projects, KeywordField::Projects),
            work_experience: isolate(Field::WorkExperience, || {
                extract_work_experience(p, sections)
            }),
        }
    }
}

/// Run one extractor; a panic yields the field's absent value.
fn isolate<T: Default>(field: Field, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(panic) => {
            let msg = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::warn!("{} extractor panicked: {}; field left empty", field, msg);
            T::default()
        }
    }
}
