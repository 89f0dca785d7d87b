//! Reconcile error types for tpf-reconcile.

use std::path::PathBuf;

/// Errors from loading build inputs and writing datasets.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The bibliography CSV could not be parsed.
    #[error("bibliography {path}: {source}")]
    Bibliography {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A score cache could not be read.
    #[error(transparent)]
    Scan(#[from] tpf_scan::ScanError),

    /// The research notes could not be listed.
    #[error(transparent)]
    Notes(#[from] tpf_notes::NoteError),

    /// A dataset could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while writing the build directory.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
