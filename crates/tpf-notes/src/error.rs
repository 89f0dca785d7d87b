//! Note error types for tpf-notes.

use std::path::PathBuf;

/// Errors from reading and parsing research notes.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// The note has too little content to be meaningful.
    #[error("note {filename} too short: {chars} characters, need {min}")]
    TooShort {
        filename: String,
        chars: usize,
        min: usize,
    },

    /// The note file could not be read.
    #[error("cannot read note {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The notes directory could not be listed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
