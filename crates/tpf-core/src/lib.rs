//! # tpf-core
//!
//! Core value types shared by every crate in the paradigm pipeline.
//!
//! This crate provides:
//! - Categorical enums (paradigm, stream, era, scan axis)
//! - Polarity scores and keyword scan results
//! - Record structs for research notes, bibliography entries, classification
//!   records, library entries and timeline entries
//! - Cross-cutting error types
//!
//! Everything here is a plain value: records are produced by one pipeline stage
//! and handed to the next by value.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod score;

/// A publication year. Years before the common era never occur in the corpus.
pub type Year = u16;
