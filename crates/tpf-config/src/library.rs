//! Bibliography filtering for the library listing and timeline.

use serde::{Deserialize, Serialize};

fn default_excluded_path_prefixes() -> Vec<String> {
    vec![
        "Historical Railways".to_string(),
        "Bibliographies".to_string(),
        "Academic articles".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Stored-path prefixes of administrative or non-book categories.
    #[serde(default = "default_excluded_path_prefixes")]
    pub excluded_path_prefixes: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            excluded_path_prefixes: default_excluded_path_prefixes(),
        }
    }
}
