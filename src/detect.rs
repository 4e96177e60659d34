//! PDF header sniffing.
//!
//! Resumes are only read after their header has been checked, so a missing
//! or non-PDF document is reported before any extraction work starts.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Information read from a PDF header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;

/// Read and check the header of the PDF at `path`.
///
/// Returns [`Error::DocumentNotFound`] when nothing exists at `path`.
///
/// # Example
/// ```no_run
/// use unresume::detect::sniff_path;
///
/// let header = sniff_path("resume.pdf").unwrap();
/// println!("{}", header);
/// ```
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::DocumentNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let mut header = [0u8; 16];
    let n = file.read(&mut header)?;
    sniff_bytes(&header[..n])
}

/// Check that `data` begins with a `%PDF-x.y` header.
pub fn sniff_bytes(data: &[u8]) -> Result<PdfHeader> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => Ok(PdfHeader {
            version: String::from_utf8_lossy(version).into_owned(),
        }),
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}

/// Check if bytes start with a readable PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_bytes(data).is_ok()
}
