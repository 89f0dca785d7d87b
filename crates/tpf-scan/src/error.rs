//! Scan error types for tpf-scan.

use std::path::PathBuf;

/// Errors from lexicon compilation, corpus walking, extraction and caches.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A lexicon pattern failed to compile.
    #[error("invalid pattern for lexicon term '{label}': {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    /// The corpus root does not exist or is not a directory.
    #[error("corpus root not found: {0}")]
    MissingRoot(PathBuf),

    /// A glob used to select documents failed to compile.
    #[error("glob error: {0}")]
    Glob(#[from] globset::Error),

    /// Text extraction failed for one document.
    #[error("extraction failed for {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    /// Reading or writing a CSV cache failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
