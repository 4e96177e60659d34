//! Layout segmentation: grouping styled spans into titled sections.
//!
//! A span whose stripped text starts with a word of four or more uppercase
//! letters opens a new section. Every following span belongs to that
//! section until the next heading. Spans before the first heading are
//! dropped.

use crate::model::{PositionedSpan, Section, Sections, TextSpan};

use super::Patterns;

/// Split spans into sections, in the order they were emitted.
pub fn segment(patterns: &Patterns, spans: &[PositionedSpan]) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<Section> = None;
    let mut preamble = 0usize;

    for positioned in spans {
        let span = &positioned.span;
        let text = span.text.trim();
        let stripped = TextSpan::new(text, span.font_size, span.font_name.as_str());

        if patterns.is_heading(text) {
            if let Some(done) = current.take() {
                commit(&mut sections, done);
            }
            log::trace!(
                "Section '{}' opened on page {} (size {})",
                text,
                positioned.page_index,
                span.font_size
            );
            current = Some(Section::new(stripped));
        } else if let Some(section) = current.as_mut() {
            section.push(stripped);
        } else {
            preamble += 1;
        }
    }

    if let Some(done) = current.take() {
        commit(&mut sections, done);
    }

    if preamble > 0 {
        log::debug!("Discarded {} spans before the first heading", preamble);
    }
    log::debug!("Segmented {} sections", sections.len());
    sections
}

fn commit(sections: &mut Sections, section: Section) {
    let label = section.label.clone();
    if sections.insert(section).is_some() {
        log::warn!("Duplicate section '{}' replaced earlier content", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, size: f32) -> PositionedSpan {
        PositionedSpan::new(TextSpan::new(text, size, "Helvetica"), 0, 0, 0)
    }

    #[test]
    fn test_no_headings_yields_nothing() {
        let p = Patterns::new();
        let sections = segment(&p, &[span("Jane Doe", 18.0), span("Engineer", 10.0)]);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_heading_seeds_its_own_section() {
        let p = Patterns::new();
        let spans = [
            span("Jane Doe", 18.0),
            span("  SKILLS ", 14.0),
            span(" Rust ", 10.0),
            span("EDUCATION", 14.0),
            span("BSc", 10.0),
        ];
        let sections = segment(&p, &spans);

        assert_eq!(sections.labels().collect::<Vec<_>>(), vec!["SKILLS", "EDUCATION"]);
        let skills = sections.get("SKILLS").unwrap();
        assert_eq!(skills.heading().text, "SKILLS");
        assert_eq!(skills.heading_size, 14.0);
        assert_eq!(skills.body()[0].text, "Rust");
    }

    #[test]
    fn test_duplicate_heading_last_content_wins() {
        let p = Patterns::new();
        let spans = [
            span("PROJECTS", 14.0),
            span("Old", 10.0),
            span("SKILLS", 14.0),
            span("PROJECTS", 14.0),
            span("New", 10.0),
        ];
        let sections = segment(&p, &spans);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.labels().collect::<Vec<_>>(), vec!["PROJECTS", "SKILLS"]);
        let projects = sections.get("PROJECTS").unwrap();
        assert_eq!(projects.body().len(), 1);
        assert_eq!(projects.body()[0].text, "New");
    }
}
