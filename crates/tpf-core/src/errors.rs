//! Cross-cutting error types.
//!
//! Stage-specific errors (`ScanError`, `NoteError`, `ReconcileError`) live in
//! their own crates. They converge into `anyhow` inside `tpf-cli`.

use thiserror::Error;

/// Errors that can be raised when building core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A categorical value could not be parsed.
    #[error("Unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A value violated one of its invariants.
    #[error("Validation error: {0}")]
    Validation(String),
}
