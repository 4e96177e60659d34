//! Data model for resume extraction.
//!
//! Spans come from the layout collaborator, sections from the segmenter,
//! and the record from the field extractors. All of them are read-only
//! artifacts of a single parse.

mod record;
mod section;
mod span;

pub use record::{AccountsIndex, Field, ParsedResume, ResumeRecord, WorkExperienceEntry};
pub use section::{Section, Sections};
pub use span::{PositionedSpan, TextSpan};
