use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::Year;
use crate::enums::Stream;

/// One row of the master bibliography.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BibliographyEntry {
    pub author: String,
    pub title: String,
    /// `None` when the cell is empty or not a number.
    pub year: Option<Year>,
    /// The stream column as entered, before folder or content corrections.
    pub stream: Stream,
    pub topic: String,
    pub have: bool,
    /// PDF filename in the literature tree; joins against the score caches.
    pub filename: String,
    /// Stored path of the PDF relative to the literature root.
    pub path: String,
    pub url: String,
    pub key_concepts: String,
}

impl BibliographyEntry {
    /// Build an entry from one spreadsheet row keyed by header name.
    ///
    /// Missing columns read as empty. `Author` falls back to `Author(s)`;
    /// `Year` accepts `1951` and `1951.0`; `Have?` is true only for `YES`.
    #[must_use]
    pub fn from_record<S: BuildHasher>(record: &HashMap<String, String, S>) -> Self {
        let cell = |name: &str| record.get(name).map_or("", |v| v.trim());
        let author = match cell("Author") {
            "" => cell("Author(s)"),
            author => author,
        };
        Self {
            author: author.to_string(),
            title: cell("Title").to_string(),
            year: parse_year_cell(cell("Year")),
            stream: Stream::from_cell(cell("Stream")),
            topic: cell("Topic").to_string(),
            have: cell("Have?").eq_ignore_ascii_case("YES"),
            filename: cell("Our Filename").to_string(),
            path: cell("Our Path(s)").to_string(),
            url: cell("Archive URL").to_string(),
            key_concepts: cell("Key Concepts").to_string(),
        }
    }
}

/// Spreadsheet exports write whole-number years as `1951` or `1951.0`.
fn parse_year_cell(raw: &str) -> Option<Year> {
    let digits = raw.strip_suffix(".0").unwrap_or(raw);
    digits.parse::<Year>().ok().filter(|y| *y > 0)
}
