//! Skills, education, certifications and projects.
//!
//! All four fields read the same way: every section whose label contains
//! one of the field's keywords contributes the spans set smaller than its
//! heading.

use regex::Regex;

use crate::model::Sections;

use super::Patterns;

/// A keyword-driven section field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordField {
    Skills,
    Education,
    Certifications,
    Projects,
}

impl KeywordField {
    fn pattern(self, patterns: &Patterns) -> &Regex {
        match self {
            KeywordField::Skills => &patterns.skills,
            KeywordField::Education => &patterns.education,
            KeywordField::Certifications => &patterns.certifications,
            KeywordField::Projects => &patterns.projects,
        }
    }
}

/// Body lines of every section matching `field`, in section order.
pub fn extract_keyword_field(
    patterns: &Patterns,
    sections: &Sections,
    field: KeywordField,
) -> Vec<String> {
    let pattern = field.pattern(patterns);

    let lines: Vec<String> = sections
        .iter()
        .filter(|section| pattern.is_match(&section.label))
        .flat_map(|section| section.smaller_than_heading())
        .map(|span| span.text.clone())
        .collect();

    log::trace!("{:?}: {} lines", field, lines.len());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, TextSpan};

    fn section(label: &str, body: &[(&str, f32)]) -> Section {
        let mut section = Section::new(TextSpan::new(label, 14.0, "Helvetica-Bold"));
        for (text, size) in body {
            section.push(TextSpan::new(*text, *size, "Helvetica"));
        }
        section
    }

    #[test]
    fn test_smaller_spans_only() {
        let p = Patterns::new();
        let mut sections = Sections::new();
        sections.insert(section(
            "TECHNICAL SKILLS",
            &[("Rust, Go", 10.0), ("Tools", 14.0), ("Docker", 9.0)],
        ));

        let skills = extract_keyword_field(&p, &sections, KeywordField::Skills);
        assert_eq!(skills, vec!["Rust, Go", "Docker"]);
    }

    #[test]
    fn test_matching_sections_concatenate() {
        let p = Patterns::new();
        let mut sections = Sections::new();
        sections.insert(section("PROJECTS", &[("Compiler", 10.0)]));
        sections.insert(section("EDUCATION", &[("BSc", 10.0)]));
        sections.insert(section("SIDE PROJECTS", &[("Game", 10.0)]));

        let projects = extract_keyword_field(&p, &sections, KeywordField::Projects);
        assert_eq!(projects, vec!["Compiler", "Game"]);
    }

    #[test]
    fn test_no_matching_section() {
        let p = Patterns::new();
        let mut sections = Sections::new();
        sections.insert(section("EXPERIENCE", &[("Acme", 10.0)]));

        assert!(extract_keyword_field(&p, &sections, KeywordField::Certifications).is_empty());
        assert!(extract_keyword_field(&p, &Sections::new(), KeywordField::Skills).is_empty());
    }
}
