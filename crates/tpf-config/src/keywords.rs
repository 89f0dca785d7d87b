//! Optional overrides of the note classifier's keyword lists.

use serde::{Deserialize, Serialize};

/// `None` keeps the built-in list; `Some` replaces it entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub practitioner: Option<Vec<String>>,

    #[serde(default)]
    pub academic: Option<Vec<String>>,
}
