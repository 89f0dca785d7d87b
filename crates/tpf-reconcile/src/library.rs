//! The library listing: bibliography entries after exclusion and stream resolution.

use tpf_core::entities::{BibliographyEntry, LibraryEntry};
use tpf_core::enums::Stream;

/// Whether the stored path falls under an administrative or non-textbook tree.
#[must_use]
pub fn is_excluded(path: &str, prefixes: &[String]) -> bool {
    !path.is_empty() && prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Listing row for an entry whose stream has been resolved.
#[must_use]
pub fn library_entry(entry: &BibliographyEntry, stream: Stream) -> LibraryEntry {
    LibraryEntry {
        author: entry.author.clone(),
        title: entry.title.clone(),
        year: entry.year,
        stream,
        topic: entry.topic.clone(),
        have: entry.have,
        url: entry.url.clone(),
        key_concepts: entry.key_concepts.clone(),
        our_filename: entry.filename.clone(),
    }
}
