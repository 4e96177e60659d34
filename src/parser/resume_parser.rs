//! The parse pipeline: collect, segment, extract.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::extract::FieldExtractor;
use crate::model::{ParsedResume, PositionedSpan};

use super::options::ParseOptions;
use super::pdf_source::PdfSource;
use super::source::DocumentSource;

/// Resume parser over any [`DocumentSource`].
pub struct ResumeParser<S: DocumentSource = PdfSource> {
    source: S,
    options: ParseOptions,
}

impl ResumeParser<PdfSource> {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let source = PdfSource::open_with_options(path, options.clone())?;
        Ok(Self { source, options })
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let source = PdfSource::from_bytes_with_options(data, options.clone())?;
        Ok(Self { source, options })
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let source = PdfSource::from_reader_with_options(reader, options.clone())?;
        Ok(Self { source, options })
    }
}

impl<S: DocumentSource> ResumeParser<S> {
    /// Wrap an existing source.
    ///
    /// Only `options.parallel` applies here; page selection, error mode and
    /// normalization belong to the source.
    pub fn with_source(source: S, options: ParseOptions) -> Self {
        Self { source, options }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Parse the document with a fresh extractor.
    pub fn parse(&self) -> Result<ParsedResume> {
        self.parse_with(&FieldExtractor::new())
    }

    /// Parse the document reusing `extractor`.
    pub fn parse_with(&self, extractor: &FieldExtractor) -> Result<ParsedResume> {
        let (text, spans) = self.collect()?;
        Ok(assemble(extractor, text, &spans))
    }

    /// Run both source capabilities, joined before extraction starts.
    fn collect(&self) -> Result<(String, Vec<PositionedSpan>)> {
        let (text, spans) = if self.options.parallel {
            rayon::join(
                || self.source.linear_text(),
                || self.source.positioned_spans(),
            )
        } else {
            (self.source.linear_text(), self.source.positioned_spans())
        };
        Ok((text?, spans?))
    }
}

/// Segment spans and extract every field.
pub(crate) fn assemble(
    extractor: &FieldExtractor,
    text: String,
    spans: &[PositionedSpan],
) -> ParsedResume {
    let sections = extractor.segment(spans);
    let record = extractor.extract(&text, &sections);

    let missing = record.missing_fields();
    if !missing.is_empty() {
        log::debug!("Fields not found: {:?}", missing);
    }

    ParsedResume {
        record,
        sections,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::TextSpan;
    use crate::parser::MemorySource;

    fn source() -> MemorySource {
        MemorySource::from_spans(vec![
            TextSpan::new("Jane Doe", 18.0, "Helvetica-Bold"),
            TextSpan::new("Backend engineer", 11.0, "Helvetica"),
            TextSpan::new("EDUCATION", 14.0, "Helvetica-Bold"),
            TextSpan::new("MSc Computer Science", 10.0, "Helvetica"),
        ])
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let parallel = ResumeParser::with_source(source(), ParseOptions::default());
        let sequential = ResumeParser::with_source(source(), ParseOptions::new().sequential());

        let a = parallel.parse().unwrap();
        let b = sequential.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(a.record.education, vec!["MSc Computer Science"]);
        assert_eq!(a.sections.len(), 1);
    }

    #[test]
    fn test_open_missing_document() {
        let result = ResumeParser::open("no/such/resume.pdf");
        assert!(matches!(result, Err(Error::DocumentNotFound(_))));
    }
}
