//! Corpus scanning options shared by the two scoring passes.

use serde::{Deserialize, Serialize};

/// Introductions and prefaces reveal the target audience, so the style pass
/// only reads the opening pages.
const fn default_style_max_pages() -> usize {
    10
}

const fn default_min_text_chars() -> usize {
    100
}

fn default_excluded_dir_names() -> Vec<String> {
    vec!["bin".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default = "default_style_max_pages")]
    pub style_max_pages: usize,

    /// Page limit for the content pass. `None` reads whole documents.
    #[serde(default)]
    pub content_max_pages: Option<usize>,

    /// Extracted text shorter than this is scored as zero evidence.
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Directory names (case-insensitive) skipped anywhere in the corpus tree.
    #[serde(default = "default_excluded_dir_names")]
    pub excluded_dir_names: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            style_max_pages: default_style_max_pages(),
            content_max_pages: None,
            min_text_chars: default_min_text_chars(),
            excluded_dir_names: default_excluded_dir_names(),
        }
    }
}
