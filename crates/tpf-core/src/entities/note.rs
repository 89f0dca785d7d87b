use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Year;
use crate::enums::Paradigm;

/// One `## Heading` block of a research note, in document order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoteSection {
    pub heading: String,
    pub body: String,
}

/// A parsed research note. Built once per file and never modified.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchNote {
    /// File stem, used as the page identifier.
    pub slug: String,
    pub filename: String,
    pub title: String,
    /// Comma-separated surnames, possibly empty.
    pub author: String,
    /// `None` when neither filename nor title carries a year.
    pub year: Option<Year>,
    /// Every section including the preamble, in document order.
    pub sections: Vec<NoteSection>,
    pub key_finding: String,
    pub source: String,
    pub significance: String,
    pub connections: String,
    /// Non-canonical sections re-assembled as markdown.
    pub details: String,
    pub paradigm: Paradigm,
}

impl ResearchNote {
    /// Body of a section by exact heading.
    #[must_use]
    pub fn section(&self, heading: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.heading == heading)
            .map(|s| s.body.as_str())
    }
}
