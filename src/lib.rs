//! # unresume
//!
//! Structured field extraction from PDF resumes.
//!
//! A resume is read twice: once as linear text and once as styled spans
//! (text, font size, font name). Spans are segmented into titled sections by
//! their all-caps headings, and a set of small heuristic extractors turns
//! the text and sections into a [`ResumeRecord`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, JsonFormat};
//!
//! fn main() -> unresume::Result<()> {
//!     let resume = parse_file("resume.pdf")?;
//!
//!     println!("{:?}", resume.record.name);
//!     println!("{}", resume.to_json(JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Fields
//!
//! - **Name**: first line made of two capitalized words
//! - **Summary**: text under a summary/objective heading, or the line after the name
//! - **Accounts**: URLs and emails grouped by domain
//! - **Skills, Education, Certifications, Projects**: body lines of matching sections
//! - **Work Experience**: jobs recovered from bold titles, companies, dates and bullets

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{is_pdf_bytes, sniff_bytes, sniff_path, PdfHeader};
pub use error::{Error, Result};
pub use extract::{FieldExtractor, Patterns};
pub use model::{
    AccountsIndex, Field, ParsedResume, PositionedSpan, ResumeRecord, Section, Sections, TextSpan,
    WorkExperienceEntry,
};
pub use parser::{
    DocumentSource, ErrorMode, MemorySource, PageSelection, ParseOptions, PdfSource, ResumeParser,
};
pub use render::{JsonFormat, NOT_FOUND};

use std::io::Read;
use std::path::Path;

/// Parse a PDF resume file.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_file;
///
/// let resume = parse_file("resume.pdf").unwrap();
/// println!("Sections: {}", resume.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedResume> {
    ResumeParser::open(path)?.parse()
}

/// Parse a PDF resume file with custom options.
///
/// # Example
///
/// ```no_run
/// use unresume::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().sequential();
/// let resume = parse_file_with_options("resume.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedResume> {
    ResumeParser::open_with_options(path, options)?.parse()
}

/// Parse a PDF resume from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<ParsedResume> {
    ResumeParser::from_bytes(data)?.parse()
}

/// Parse a PDF resume from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<ParsedResume> {
    ResumeParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse a PDF resume from a reader.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let resume = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedResume> {
    ResumeParser::from_reader(reader)?.parse()
}

/// Extract fields from text and spans produced by another PDF library.
///
/// `spans` must be in the library's traversal order (page, block, line).
///
/// # Example
///
/// ```
/// use unresume::{parse_text_and_spans, PositionedSpan, TextSpan};
///
/// let spans = vec![
///     PositionedSpan::new(TextSpan::new("SKILLS", 14.0, "Arial-Bold"), 0, 0, 0),
///     PositionedSpan::new(TextSpan::new("Rust", 10.0, "Arial"), 0, 0, 1),
/// ];
/// let resume = parse_text_and_spans("Jane Doe\nSKILLS\nRust", &spans);
/// assert_eq!(resume.record.name.as_deref(), Some("Jane Doe"));
/// assert_eq!(resume.record.skills, vec!["Rust"]);
/// ```
pub fn parse_text_and_spans(text: &str, spans: &[PositionedSpan]) -> ParsedResume {
    parser::assemble(&FieldExtractor::new(), text.to_string(), spans)
}

/// Convert a PDF resume to JSON.
///
/// # Example
///
/// ```no_run
/// use unresume::{to_json, JsonFormat};
///
/// let json = to_json("resume.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("resume.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    parse_file(path)?.to_json(format)
}

/// Parse a PDF resume file without blocking the async runtime.
///
/// The file is read with `tokio::fs` and the pipeline runs on the blocking
/// thread pool.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let path = path.as_ref().to_path_buf();
    let data = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::DocumentNotFound(path.clone()),
        _ => Error::Io(e),
    })?;

    tokio::task::spawn_blocking(move || parse_bytes_with_options(&data, options))
        .await
        .map_err(|e| Error::Other(format!("Parse task failed: {}", e)))?
}

/// Builder for parsing resumes.
///
/// # Example
///
/// ```no_run
/// use unresume::{JsonFormat, Unresume};
///
/// let json = Unresume::new()
///     .lenient()
///     .sequential()
///     .parse("resume.pdf")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), unresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unresume {
    parse_options: ParseOptions,
}

impl Unresume {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip unreadable pages instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Collect text and spans one after the other.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Keep extracted text as decoded, without NFKC normalization.
    pub fn without_normalization(mut self) -> Self {
        self.parse_options = self.parse_options.with_normalization(false);
        self
    }

    /// Options the builder will parse with.
    pub fn options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Parse a PDF file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ParsedResume> {
        parse_file_with_options(path, self.parse_options)
    }

    /// Parse a PDF from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ParsedResume> {
        parse_bytes_with_options(data, self.parse_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_unresume_builder_default() {
        let builder = Unresume::default();
        assert_eq!(builder.options().error_mode, ErrorMode::Strict);
        assert!(builder.options().parallel);
        assert!(builder.options().normalize_unicode);
    }

    #[test]
    fn test_unresume_builder_chained() {
        let builder = Unresume::new()
            .lenient()
            .sequential()
            .without_normalization()
            .with_pages(PageSelection::Range(1..=2));

        assert_eq!(builder.options().error_mode, ErrorMode::Lenient);
        assert!(!builder.options().parallel);
        assert!(!builder.options().normalize_unicode);
        assert_eq!(builder.options().pages, PageSelection::Range(1..=2));
    }

    #[test]
    fn test_unresume_builder_parse_invalid_bytes() {
        let result = Unresume::new().parse_bytes(b"not a pdf");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(parse_bytes(&data).is_err());
    }

    #[test]
    fn test_parse_bytes_too_short() {
        assert!(parse_bytes(b"%PDF").is_err());
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("missing/resume.pdf");
        assert!(matches!(result, Err(Error::DocumentNotFound(_))));
    }

    #[test]
    fn test_parse_text_and_spans_without_headings() {
        let spans = vec![PositionedSpan::new(
            TextSpan::new("John Doe", 16.0, "Helvetica"),
            0,
            0,
            0,
        )];
        let resume = parse_text_and_spans("John Doe\nSoftware Engineer", &spans);

        assert!(resume.sections.is_empty());
        assert_eq!(resume.record.name.as_deref(), Some("John Doe"));
        assert!(resume.record.skills.is_empty());
        assert!(resume.record.work_experience.is_empty());
    }
}
