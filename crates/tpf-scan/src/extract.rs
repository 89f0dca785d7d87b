//! PDF text extraction.
//!
//! The scoring passes only need "raw text of the first N pages", so extraction
//! sits behind [`TextExtractor`]. [`PdfTextExtractor`] implements it with
//! `lopdf`; tests and alternative back ends plug in their own.

use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

use crate::error::ScanError;

/// Source of raw document text.
pub trait TextExtractor {
    /// Text of the first `max_pages` pages (all pages when `None`), one page
    /// per line block, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Extraction`] when the document cannot be read.
    fn extract(&self, path: &Path, max_pages: Option<usize>) -> Result<String, ScanError>;
}

/// `lopdf`-backed extractor.
///
/// Pages whose content streams fail to decode are skipped. A panic inside the
/// PDF library is caught and reported as an extraction error for that file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn extract_inner(path: &Path, max_pages: Option<usize>) -> Result<String, ScanError> {
        let doc = Document::load(path).map_err(|e| ScanError::Extraction {
            path: path.to_path_buf(),
            reason: format!("failed to load PDF: {e}"),
        })?;

        // get_pages is keyed by 1-based page number, already in order.
        let pages = doc.get_pages();
        let limit = max_pages.unwrap_or(usize::MAX);
        let mut text = String::new();
        for page_num in pages.keys().take(limit) {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    debug!(path = %path.display(), page = page_num, error = %e, "skipping unreadable page");
                }
            }
        }
        Ok(text)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path, max_pages: Option<usize>) -> Result<String, ScanError> {
        panic::catch_unwind(AssertUnwindSafe(|| Self::extract_inner(path, max_pages)))
            .unwrap_or_else(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "PDF library panicked".to_string());
                Err(ScanError::Extraction {
                    path: path.to_path_buf(),
                    reason,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn garbage_file_is_an_extraction_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = PdfTextExtractor::new().extract(&path, Some(10)).unwrap_err();
        assert!(matches!(err, ScanError::Extraction { .. }));
        assert!(err.to_string().contains("broken.pdf"));
    }

    #[test]
    fn missing_file_is_an_extraction_error() {
        let tmp = TempDir::new().unwrap();
        let err = PdfTextExtractor::new()
            .extract(&tmp.path().join("absent.pdf"), None)
            .unwrap_err();
        assert!(matches!(err, ScanError::Extraction { .. }));
    }
}
