//! Compiled patterns shared by the field extractors.

use regex::Regex;

/// Heading words that open a summary, matched as a whole line.
pub const SUMMARY_TITLES: &[&str] = &[
    "Summary",
    "Professional Summary",
    "Career Summary",
    "Executive Summary",
    "Summary of Qualifications",
    "Profile",
    "Professional Profile",
    "Personal Profile",
    "Career Profile",
    "Personal Summary",
    "Overview",
    "Objective",
    "Career Objective",
    "Professional Objective",
    "Statement",
    "Introduction",
    "About Me",
];

/// Heading keywords for the skills field.
pub const SKILLS_KEYWORDS: &[&str] = &["Skills", "Technical Skills", "Core Competencies"];

/// Heading keywords for the education field.
pub const EDUCATION_KEYWORDS: &[&str] = &["Education", "Academic Background"];

/// Heading keywords for the certifications field.
pub const CERTIFICATION_KEYWORDS: &[&str] = &["Certification", "Certifications", "Licenses"];

/// Heading keywords for the projects field.
pub const PROJECT_KEYWORDS: &[&str] = &["Projects", "Project Experience"];

/// Heading keywords for the work-experience field.
pub const WORK_EXPERIENCE_KEYWORDS: &[&str] = &[
    "Work Experience",
    "Professional Experience",
    "Employment History",
];

/// Every regular expression the extractors use, compiled once.
///
/// Construct one per batch and share it; matching is read-only.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Line starting with a word of four or more uppercase letters
    pub heading: Regex,
    /// Two capitalized tokens and nothing else
    pub name: Regex,
    /// Letters and whitespace only
    pub name_shaped: Regex,
    /// One of [`SUMMARY_TITLES`] as the whole line
    pub summary_title: Regex,
    /// URL-like or email token
    pub account: Regex,
    /// `MM/YYYY` or a bare year
    pub date: Regex,
    pub skills: Regex,
    pub education: Regex,
    pub certifications: Regex,
    pub projects: Regex,
    pub work_experience: Regex,
}

impl Patterns {
    /// Compile all patterns.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"^[A-Z]{4,}\b").unwrap(),
            name: Regex::new(r"^[A-Z][a-z][a-zA-Z]*\s+[A-Z][a-z][a-zA-Z]*$").unwrap(),
            name_shaped: Regex::new(r"^[A-Za-z\s]+$").unwrap(),
            summary_title: Regex::new(&format!(
                r"(?i)^(?:{})\s*$",
                alternation(SUMMARY_TITLES)
            ))
            .unwrap(),
            // URL first: a dotted local part (`jane.doe@…`) reads as a domain.
            account: Regex::new(
                r"(?P<url>(?:https?://)?(?:www\.)?(?P<domain>[a-zA-Z0-9-]+)\.[a-zA-Z]+(?:/\S*)?)|(?P<email>[a-zA-Z0-9._%+-]+@(?P<host>[a-zA-Z0-9.-]+)\.[a-zA-Z]{2,})",
            )
            .unwrap(),
            date: Regex::new(r"\b(?:\d{2}/\d{4}|\d{4})\b").unwrap(),
            skills: keyword_regex(SKILLS_KEYWORDS),
            education: keyword_regex(EDUCATION_KEYWORDS),
            certifications: keyword_regex(CERTIFICATION_KEYWORDS),
            projects: keyword_regex(PROJECT_KEYWORDS),
            work_experience: keyword_regex(WORK_EXPERIENCE_KEYWORDS),
        }
    }

    /// Check if a stripped line or span text opens a new section.
    pub fn is_heading(&self, text: &str) -> bool {
        self.heading.is_match(text)
    }

    /// Check if text carries a date or the word "Present".
    pub fn is_dated(&self, text: &str) -> bool {
        self.date.is_match(text) || text.contains("Present")
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

/// Case-insensitive "label contains one of these keywords" test.
fn keyword_regex(keywords: &[&str]) -> Regex {
    Regex::new(&format!("(?i)(?:{})", alternation(keywords))).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_pattern() {
        let p = Patterns::new();
        assert!(p.is_heading("EXPERIENCE"));
        assert!(p.is_heading("WORK EXPERIENCE"));
        assert!(p.is_heading("SKILLS & Tools"));
        assert!(!p.is_heading("CV"));
        assert!(!p.is_heading("JAVAscript"));
        assert!(!p.is_heading("Skills"));
        assert!(!p.is_heading(" SKILLS"));
    }

    #[test]
    fn test_summary_title_whole_line() {
        let p = Patterns::new();
        assert!(p.summary_title.is_match("Professional Summary"));
        assert!(p.summary_title.is_match("ABOUT ME  "));
        assert!(p.summary_title.is_match("objective"));
        assert!(!p.summary_title.is_match("Summary of work done"));
    }

    #[test]
    fn test_date_pattern() {
        let p = Patterns::new();
        assert!(p.is_dated("01/2020 - 03/2022"));
        assert!(p.is_dated("2019 - 2021"));
        assert!(p.is_dated("Jan 2021 - Present"));
        assert!(!p.is_dated("Shipped 12345 widgets"));
        assert!(!p.is_dated("present day"));
    }

    #[test]
    fn test_keyword_patterns_case_insensitive() {
        let p = Patterns::new();
        assert!(p.skills.is_match("TECHNICAL SKILLS"));
        assert!(p.education.is_match("EDUCATION AND TRAINING"));
        assert!(p.certifications.is_match("LICENSES"));
        assert!(p.work_experience.is_match("PROFESSIONAL EXPERIENCE"));
        assert!(!p.projects.is_match("PROJECT"));
    }
}
