//! Positioned span collection from PDF content streams.
//!
//! Walks each page's text operators and emits one span per shown string,
//! carrying the effective font size and the font's base name. Spans are
//! numbered by page, text block (`BT`..`ET`) and line within the block, in
//! content-stream order.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{PositionedSpan, TextSpan};

use super::backend::{ContentOp, PageId, PdfBackend, PdfValue};

/// `TJ` adjustment (thousandths of text space) treated as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Baseline movement smaller than this stays on the same line.
const SAME_LINE_EPSILON: f32 = 0.5;

/// Collects positioned spans from one backend.
pub struct SpanCollector<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: PdfBackend + ?Sized> SpanCollector<'a, B> {
    /// Create a collector over `backend`.
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Collect spans from a 1-based page number.
    ///
    /// `page_index` is the zero-based index stamped on every span.
    pub fn collect_page(&self, page_num: u32, page_index: u32) -> Result<Vec<PositionedSpan>> {
        let pages = self.backend.pages();
        let page_id = *pages
            .get(&page_num)
            .ok_or(crate::Error::PageOutOfRange(page_num, pages.len() as u32))?;

        let fonts = self.backend.page_fonts(page_id)?;
        let content = self.backend.page_content(page_id)?;
        let ops = self.backend.decode_content(&content)?;

        let spans = self.walk(&ops, page_id, page_index, &fonts);
        log::debug!("Page {}: {} spans", page_num, spans.len());
        Ok(spans)
    }

    fn walk(
        &self,
        ops: &[ContentOp],
        page_id: PageId,
        page_index: u32,
        fonts: &HashMap<Vec<u8>, String>,
    ) -> Vec<PositionedSpan> {
        let mut state = WalkState::new(page_index);

        for op in ops {
            match op.operator.as_str() {
                "BT" => state.begin_block(),
                "ET" => state.in_block = false,
                "Tf" => {
                    if let Some(PdfValue::Name(name)) = op.operands.first() {
                        state.font_base = fonts
                            .get(name)
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(name).into_owned());
                        state.font_resource = name.clone();
                    }
                    if let Some(size) = op.number(1) {
                        state.font_size = size;
                    }
                }
                "TL" => {
                    if let Some(leading) = op.number(0) {
                        state.matrix.leading = leading;
                    }
                }
                "Td" => {
                    let tx = op.number(0).unwrap_or(0.0);
                    let ty = op.number(1).unwrap_or(0.0);
                    state.matrix.translate(tx, ty);
                }
                "TD" => {
                    let tx = op.number(0).unwrap_or(0.0);
                    let ty = op.number(1).unwrap_or(0.0);
                    state.matrix.leading = -ty;
                    state.matrix.translate(tx, ty);
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let n = |i| op.number(i).unwrap_or(0.0);
                        state.matrix.set([n(0), n(1), n(2), n(3), n(4), n(5)]);
                    }
                }
                "T*" => state.matrix.next_line(),
                "Tj" | "TJ" => {
                    let text = self.shown_text(op, page_id, &state.font_resource);
                    state.emit(text);
                }
                "'" | "\"" => {
                    state.matrix.next_line();
                    let idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(PdfValue::Str(bytes)) = op.operands.get(idx) {
                        let text =
                            self.backend
                                .decode_text(page_id, &state.font_resource, bytes);
                        state.emit(text);
                    }
                }
                _ => {}
            }
        }

        state.spans
    }

    /// Decode the string operand(s) of a `Tj` or `TJ` operator.
    fn shown_text(&self, op: &ContentOp, page_id: PageId, font: &[u8]) -> String {
        match op.operands.first() {
            Some(PdfValue::Str(bytes)) => self.backend.decode_text(page_id, font, bytes),
            Some(PdfValue::Array(items)) => {
                let mut combined = String::new();
                for item in items {
                    match item {
                        PdfValue::Str(bytes) => {
                            combined.push_str(&self.backend.decode_text(page_id, font, bytes));
                        }
                        other => {
                            // Negative adjustments advance the pen; large ones are word gaps.
                            let gap = other.as_number().map(|n| -n).unwrap_or(0.0);
                            if gap > TJ_SPACE_THRESHOLD && needs_space(&combined) {
                                combined.push(' ');
                            }
                        }
                    }
                }
                combined
            }
            _ => String::new(),
        }
    }
}

/// Mutable state while walking one page.
struct WalkState {
    page_index: u32,
    block_index: Option<u32>,
    line_index: u32,
    last_baseline: Option<f32>,
    in_block: bool,
    font_resource: Vec<u8>,
    font_base: String,
    font_size: f32,
    matrix: TextMatrix,
    spans: Vec<PositionedSpan>,
}

impl WalkState {
    fn new(page_index: u32) -> Self {
        Self {
            page_index,
            block_index: None,
            line_index: 0,
            last_baseline: None,
            in_block: false,
            font_resource: Vec::new(),
            font_base: String::new(),
            font_size: 12.0,
            matrix: TextMatrix::default(),
            spans: Vec::new(),
        }
    }

    fn begin_block(&mut self) {
        self.in_block = true;
        self.block_index = Some(self.block_index.map_or(0, |b| b + 1));
        self.line_index = 0;
        self.last_baseline = None;
        self.matrix.reset();
    }

    fn emit(&mut self, text: String) {
        if !self.in_block || text.trim().is_empty() {
            return;
        }

        let baseline = self.matrix.f;
        if let Some(last) = self.last_baseline {
            if (baseline - last).abs() > SAME_LINE_EPSILON {
                self.line_index += 1;
            }
        }
        self.last_baseline = Some(baseline);

        let size = self.font_size * self.matrix.scale();
        self.spans.push(PositionedSpan::new(
            TextSpan::new(text, size, self.font_base.clone()),
            self.page_index,
            self.block_index.unwrap_or(0),
            self.line_index,
        ));
    }
}

/// Text matrix for tracking position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    /// Line-start matrix translation, used by `Td`/`T*`
    line_e: f32,
    line_f: f32,
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            line_e: 0.0,
            line_f: 0.0,
            leading: 0.0,
        }
    }
}

impl TextMatrix {
    fn reset(&mut self) {
        let leading = self.leading;
        *self = Self {
            leading,
            ..Self::default()
        };
    }

    fn set(&mut self, [a, b, c, d, e, f]: [f32; 6]) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
        self.line_e = e;
        self.line_f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.line_e += tx * self.a + ty * self.c;
        self.line_f += tx * self.b + ty * self.d;
        self.e = self.line_e;
        self.f = self.line_f;
    }

    fn next_line(&mut self) {
        self.translate(0.0, -self.leading);
    }

    /// Vertical scale applied to the font size.
    fn scale(&self) -> f32 {
        (self.b * self.b + self.d * self.d).sqrt()
    }
}

/// Lay spans out as plain text, one output line per (page, block, line).
///
/// Spans sharing a line are concatenated in stream order.
pub fn spans_to_text(spans: &[PositionedSpan]) -> String {
    let mut text = String::new();
    let mut current = None;

    for positioned in spans {
        let key = (
            positioned.page_index,
            positioned.block_index,
            positioned.line_index,
        );
        if current.is_some_and(|k| k != key) {
            text.push('\n');
        }
        current = Some(key);
        text.push_str(&positioned.span.text);
    }

    text
}

/// Whether a word gap should become a space after `text`.
fn needs_space(text: &str) -> bool {
    match text.chars().last() {
        Some(c) => !c.is_whitespace() && !is_spaceless_script_char(c),
        None => false,
    }
}

/// Check if character is from a script that doesn't use word spaces.
/// Chinese and Japanese don't use spaces between words, but Korean does.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF        // CJK Unified Ideographs
        | 0x3400..=0x4DBF      // Extension A
        | 0x20000..=0x2EBEF    // Extensions B-F
        | 0x3040..=0x309F      // Hiragana
        | 0x30A0..=0x30FF      // Katakana
        | 0x3000..=0x303F      // CJK Symbols and Punctuation
    )
}
