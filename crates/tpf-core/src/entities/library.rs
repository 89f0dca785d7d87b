use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Year;
use crate::enums::Stream;

/// A bibliography entry as shown in the library listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LibraryEntry {
    pub author: String,
    pub title: String,
    pub year: Option<Year>,
    /// Resolved stream (folder hint plus content override).
    pub stream: Stream,
    pub topic: String,
    pub have: bool,
    pub url: String,
    pub key_concepts: String,
    pub our_filename: String,
}
