//! # tpf-notes
//!
//! Structured reading of the markdown research notes.
//!
//! A note is a loosely formatted markdown file: an optional `# Title`, then
//! `## Section` blocks. Parsing recovers the canonical sections (Key Finding,
//! Source, Significance, Connections), collects the rest as details, infers
//! year and author from the filename or title, and assigns a paradigm label
//! with [`ParadigmClassifier`].

pub mod classify;
pub mod error;
pub mod fields;
pub mod loader;
pub mod parser;

pub use classify::{KeywordCounts, ParadigmClassifier, TIE_PARADIGM};
pub use error::NoteError;
pub use loader::load_notes;
pub use parser::NoteParser;
