//! Document access: PDF backend, span collection, sources and the parse driver.

mod backend;
mod options;
mod pdf_source;
mod resume_parser;
mod source;
mod spans;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use pdf_source::PdfSource;
pub(crate) use resume_parser::assemble;
pub use resume_parser::ResumeParser;
pub use source::{DocumentSource, MemorySource};
pub use spans::{spans_to_text, SpanCollector};
