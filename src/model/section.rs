//! Titled sections of a resume.

use serde::Serialize;

use super::TextSpan;

/// A heading label plus the spans that follow it until the next heading.
///
/// The heading span is always `content[0]`. Its font size is kept as
/// `heading_size`, the baseline that body spans are compared against.
///
/// Sections are only built through [`Section::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Literal heading text
    pub label: String,
    /// Font size of the heading span
    pub heading_size: f32,
    /// Heading span followed by body spans, in document order
    content: Vec<TextSpan>,
}

impl Section {
    /// Open a section seeded with its heading span.
    pub fn new(heading: TextSpan) -> Self {
        Self {
            label: heading.text.clone(),
            heading_size: heading.font_size,
            content: vec![heading],
        }
    }

    /// Append a body span.
    pub fn push(&mut self, span: TextSpan) {
        self.content.push(span);
    }

    /// The heading span.
    pub fn heading(&self) -> &TextSpan {
        &self.content[0]
    }

    /// All spans, heading first.
    pub fn content(&self) -> &[TextSpan] {
        &self.content
    }

    /// Spans after the heading.
    pub fn body(&self) -> &[TextSpan] {
        &self.content[1..]
    }

    /// Spans set in a strictly smaller font than the heading.
    ///
    /// The heading itself never qualifies since its size is the baseline.
    pub fn smaller_than_heading(&self) -> impl Iterator<Item = &TextSpan> {
        self.content
            .iter()
            .filter(move |span| span.font_size < self.heading_size)
    }
}

/// Sections keyed by heading label, in document order.
///
/// Inserting a label that already exists replaces that section's content
/// and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, returning the one it replaced if the label was taken.
    pub fn insert(&mut self, section: Section) -> Option<Section> {
        match self.sections.iter_mut().find(|s| s.label == section.label) {
            Some(existing) => Some(std::mem::replace(existing, section)),
            None => {
                self.sections.push(section);
                None
            }
        }
    }

    /// Look up a section by its exact label.
    pub fn get(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Iterate sections in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Heading labels in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if no heading was found.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(label: &str) -> TextSpan {
        TextSpan::new(label, 14.0, "Helvetica-Bold")
    }

    #[test]
    fn test_section_seeded_with_heading() {
        let mut section = Section::new(heading("SKILLS"));
        section.push(TextSpan::new("Rust", 10.0, "Helvetica"));

        assert_eq!(section.label, "SKILLS");
        assert_eq!(section.heading_size, 14.0);
        assert_eq!(section.heading().text, "SKILLS");
        assert_eq!(section.content().len(), 2);
        assert_eq!(section.body().len(), 1);
    }

    #[test]
    fn test_serialized_section_leads_with_heading() {
        let mut sections = Sections::new();
        let mut skills = Section::new(heading("SKILLS"));
        skills.push(TextSpan::new("Rust", 10.0, "Helvetica"));
        sections.insert(skills);

        let value = serde_json::to_value(&sections).unwrap();
        assert_eq!(value[0]["label"], "SKILLS");
        assert_eq!(value[0]["heading_size"], 14.0);
        assert_eq!(value[0]["content"][0]["text"], "SKILLS");
        assert_eq!(value[0]["content"][1]["text"], "Rust");
    }

    #[test]
    fn test_smaller_than_heading_excludes_heading() {
        let mut section = Section::new(heading("EDUCATION"));
        section.push(TextSpan::new("BSc Computer Science", 10.0, "Helvetica"));
        section.push(TextSpan::new("Same size line", 14.0, "Helvetica"));

        let texts: Vec<_> = section
            .smaller_than_heading()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, vec!["BSc Computer Science"]);
    }

    #[test]
    fn test_duplicate_label_replaces_in_place() {
        let mut sections = Sections::new();
        let mut first = Section::new(heading("PROJECTS"));
        first.push(TextSpan::new("Old project", 10.0, "Helvetica"));
        sections.insert(first);
        sections.insert(Section::new(heading("SKILLS")));

        let mut second = Section::new(heading("PROJECTS"));
        second.push(TextSpan::new("New project", 10.0, "Helvetica"));
        let replaced = sections.insert(second);

        assert!(replaced.is_some());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections.labels().collect::<Vec<_>>(), vec!["PROJECTS", "SKILLS"]);
        let projects = sections.get("PROJECTS").unwrap();
        assert_eq!(projects.body()[0].text, "New project");
    }
}
