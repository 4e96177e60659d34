//! Text spans produced by the layout collaborator.

use serde::{Deserialize, Serialize};

/// A contiguous run of text sharing one font size and font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Font name including style (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, font_size: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_name: font_name.into(),
        }
    }

    /// Whether the font name marks this span as bold.
    ///
    /// Style is encoded in the font name itself, so this is a case-sensitive
    /// substring test for `Bold`.
    pub fn is_bold(&self) -> bool {
        self.font_name.contains("Bold")
    }

    /// Number of whitespace-separated tokens in the text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A span together with where the collaborator found it.
///
/// Indices follow the collaborator's traversal order (page, then block,
/// then line), which is not guaranteed to match reading order on
/// multi-column pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedSpan {
    /// The span itself
    pub span: TextSpan,
    /// Zero-based page index
    pub page_index: u32,
    /// Zero-based text block index within the page
    pub block_index: u32,
    /// Zero-based line index within the block
    pub line_index: u32,
}

impl PositionedSpan {
    /// Create a positioned span.
    pub fn new(span: TextSpan, page_index: u32, block_index: u32, line_index: u32) -> Self {
        Self {
            span,
            page_index,
            block_index,
            line_index,
        }
    }

    /// Drop the position and keep the span.
    pub fn into_span(self) -> TextSpan {
        self.span
    }
}
