//! Work-experience entries recovered from the first matching section.
//!
//! The section body is read span by span. Each span triggers at most one
//! rule, the first in [`RULES`] whose condition holds:
//!
//! | Rule | Condition | Effect |
//! |---|---|---|
//! | Title | bold, size ≥ 10 | commit the open entry if titled, start a new one |
//! | Company | size ≥ 10, not bold, title set, company unset | set company |
//! | Dates | date or "Present" in text | set dates, start collecting |
//! | Responsibility | collecting, size < 10, more than 3 words | append line |
//!
//! Entries that never received a title are dropped.

use crate::model::{Sections, TextSpan, WorkExperienceEntry};

use super::Patterns;

/// Font size separating headline lines (title, company) from body lines.
pub const HEADLINE_SIZE: f32 = 10.0;

/// Responsibility lines need more words than this.
pub const MIN_RESPONSIBILITY_WORDS: usize = 3;

/// Which rule a span triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Title,
    Company,
    Dates,
    Responsibility,
}

/// Facts about one span that the rules look at.
struct Cue<'a> {
    span: &'a TextSpan,
    bold: bool,
    dated: bool,
}

/// The in-progress entry and whether body lines are being collected.
#[derive(Debug, Default)]
struct Builder {
    entries: Vec<WorkExperienceEntry>,
    current: WorkExperienceEntry,
    collecting: bool,
}

impl Builder {
    fn commit(&mut self) {
        let entry = std::mem::take(&mut self.current);
        if entry.has_title() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<WorkExperienceEntry> {
        self.commit();
        self.entries
    }
}

struct Rule {
    kind: RuleKind,
    matches: fn(&Cue, &Builder) -> bool,
    apply: fn(&mut Builder, &TextSpan),
}

/// Rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        kind: RuleKind::Title,
        matches: |cue, _| cue.bold && cue.span.font_size >= HEADLINE_SIZE,
        apply: |b, span| {
            if b.current.has_title() {
                b.commit();
            }
            b.current.title = Some(span.text.clone());
            b.collecting = false;
        },
    },
    Rule {
        kind: RuleKind::Company,
        matches: |cue, b| {
            !cue.bold
                && cue.span.font_size >= HEADLINE_SIZE
                && b.current.has_title()
                && !b.current.has_company()
        },
        apply: |b, span| {
            b.current.company = Some(span.text.clone());
            b.collecting = false;
        },
    },
    Rule {
        kind: RuleKind::Dates,
        matches: |cue, _| cue.dated,
        apply: |b, span| {
            b.current.dates = Some(span.text.clone());
            b.collecting = true;
        },
    },
    Rule {
        kind: RuleKind::Responsibility,
        matches: |cue, b| {
            b.collecting
                && cue.span.font_size < HEADLINE_SIZE
                && cue.span.word_count() > MIN_RESPONSIBILITY_WORDS
        },
        apply: |b, span| b.current.responsibilities.push(span.text.clone()),
    },
];

fn first_rule(cue: &Cue, builder: &Builder) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(cue, builder))
}

/// The rule a span would trigger given the entry state so far.
///
/// `titled`, `has_company` and `collecting` describe the open entry.
pub fn classify(
    patterns: &Patterns,
    span: &TextSpan,
    titled: bool,
    has_company: bool,
    collecting: bool,
) -> Option<RuleKind> {
    let builder = Builder {
        entries: Vec::new(),
        current: WorkExperienceEntry {
            title: titled.then(|| "title".to_string()),
            company: has_company.then(|| "company".to_string()),
            ..Default::default()
        },
        collecting,
    };
    let cue = Cue {
        span,
        bold: span.is_bold(),
        dated: patterns.is_dated(&span.text),
    };
    first_rule(&cue, &builder).map(|rule| rule.kind)
}

/// Jobs from the first section labelled like a work-experience heading.
///
/// Later matching sections are ignored.
pub fn extract_work_experience(
    patterns: &Patterns,
    sections: &Sections,
) -> Vec<WorkExperienceEntry> {
    let Some(section) = sections
        .iter()
        .find(|s| patterns.work_experience.is_match(&s.label))
    else {
        return Vec::new();
    };

    let mut builder = Builder::default();
    for span in section.body() {
        let cue = Cue {
            span,
            bold: span.is_bold(),
            dated: patterns.is_dated(&span.text),
        };
        if let Some(rule) = first_rule(&cue, &builder) {
            log::trace!("{:?}: {}", rule.kind, span.text);
            (rule.apply)(&mut builder, span);
        }
    }

    let entries = builder.finish();
    log::debug!(
        "Work experience: {} entries from '{}'",
        entries.len(),
        section.label
    );
    entries
}
