//! Document sources: the two capabilities the extractors are built on.

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{PositionedSpan, TextSpan};

/// Provides the linear text and the positioned spans of one document.
///
/// The two capabilities are independent passes over the same document and
/// may be called concurrently.
pub trait DocumentSource: Send + Sync {
    /// Plain text of the document in reading order, lines separated by `\n`.
    fn linear_text(&self) -> Result<String>;

    /// Styled spans in content-stream order (page, block, line, span).
    fn positioned_spans(&self) -> Result<Vec<PositionedSpan>>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn linear_text(&self) -> Result<String> {
        (**self).linear_text()
    }

    fn positioned_spans(&self) -> Result<Vec<PositionedSpan>> {
        (**self).positioned_spans()
    }
}

/// A source over text and spans that were already extracted elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: String,
    spans: Vec<PositionedSpan>,
}

impl MemorySource {
    /// Create a source from materialized collaborator outputs.
    pub fn new(text: impl Into<String>, spans: Vec<PositionedSpan>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }

    /// Create a source where every span sits on its own line of one block.
    ///
    /// The linear text is the span texts joined by newlines.
    pub fn from_spans(spans: Vec<TextSpan>) -> Self {
        let text = spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let spans = spans
            .into_iter()
            .enumerate()
            .map(|(i, span)| PositionedSpan::new(span, 0, 0, i as u32))
            .collect();
        Self { text, spans }
    }
}

impl DocumentSource for MemorySource {
    fn linear_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn positioned_spans(&self) -> Result<Vec<PositionedSpan>> {
        Ok(self.spans.clone())
    }
}

/// NFKC-normalize extracted text (folds ligatures such as `ﬁ`).
pub(crate) fn normalize(text: &str) -> String {
    text.nfkc().collect()
}
