//! Document source over PDF bytes using lopdf.

use std::io::Read;
use std::path::Path;

use crate::detect::{sniff_bytes, sniff_path};
use crate::error::{Error, Result};
use crate::model::PositionedSpan;

use super::backend::{LopdfBackend, PdfBackend};
use super::options::{ErrorMode, ParseOptions};
use super::source::{normalize, DocumentSource};
use super::spans::{spans_to_text, SpanCollector};

/// A PDF document held in memory.
///
/// Each capability loads its own backend over the shared bytes, so the
/// linear-text and span passes never share parser state. Linear text breaks
/// lines wherever the content stream moves to a new baseline.
pub struct PdfSource {
    data: Vec<u8>,
    options: ParseOptions,
    page_count: u32,
}

impl PdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    ///
    /// Fails with [`Error::DocumentNotFound`] before reading anything else
    /// when the path does not exist.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let header = sniff_path(path)?;
        log::debug!("Opening {} ({})", path.display(), header);

        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(data, options)
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Load a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: impl Into<Vec<u8>>, options: ParseOptions) -> Result<Self> {
        let data = data.into();
        sniff_bytes(&data)?;

        let page_count = LopdfBackend::load(&data)?.page_count();
        log::debug!("Loaded PDF with {} pages", page_count);

        Ok(Self {
            data,
            options,
            page_count,
        })
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Load a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(data, options)
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Options this source was created with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Selected 1-based page numbers in document order.
    fn selected_pages(&self, backend: &LopdfBackend) -> Vec<u32> {
        backend
            .pages()
            .into_keys()
            .filter(|n| self.options.pages.includes(*n))
            .collect()
    }

    /// Run `f` on every selected page, applying the error mode.
    fn per_page<T>(
        &self,
        backend: &LopdfBackend,
        mut f: impl FnMut(u32) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut out = Vec::new();
        for page_num in self.selected_pages(backend) {
            match f(page_num) {
                Ok(value) => out.push(value),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping page {}: {}", page_num, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    /// Walk every selected page's content stream on a fresh backend.
    fn collect_spans(&self) -> Result<Vec<PositionedSpan>> {
        let backend = LopdfBackend::load(&self.data)?;
        let collector = SpanCollector::new(&backend);

        let pages = self.per_page(&backend, |n| {
            collector
                .collect_page(n, n - 1)
                .map_err(|e| Error::TextExtract(format!("Page {}: {}", n, e)))
        })?;
        Ok(pages.into_iter().flatten().collect())
    }

    fn finish_text(&self, text: String) -> String {
        if self.options.normalize_unicode {
            normalize(&text)
        } else {
            text
        }
    }
}

impl DocumentSource for PdfSource {
    fn linear_text(&self) -> Result<String> {
        let spans = self.collect_spans()?;
        Ok(self.finish_text(spans_to_text(&spans)))
    }

    fn positioned_spans(&self) -> Result<Vec<PositionedSpan>> {
        let mut spans = self.collect_spans()?;
        if self.options.normalize_unicode {
            for positioned in &mut spans {
                positioned.span.text = normalize(&positioned.span.text);
            }
        }
        log::debug!("Collected {} spans", spans.len());
        Ok(spans)
    }
}
