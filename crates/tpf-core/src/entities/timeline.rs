use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Year;
use crate::enums::Paradigm;

/// A display-ready point on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimelineEntry {
    /// Research-note slug; `None` for entries that come from the bibliography alone.
    pub slug: Option<String>,
    pub title: String,
    pub author: String,
    pub year: Year,
    pub paradigm: Paradigm,
    /// Content score rounded to three decimals.
    pub score: f64,
    pub key_finding: String,
    pub has_note: bool,
}
