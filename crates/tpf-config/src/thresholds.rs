//! Evidence gates and cut-offs for scoring and reconciliation.

use serde::{Deserialize, Serialize};

/// |style score| above which the content signal may flip a folder stream.
/// 0.5 corresponds to roughly a 3:1 ratio of hits.
const fn default_stream_override_score() -> f64 {
    0.5
}

/// Minimum style-axis hits before any override is considered.
const fn default_min_override_hits() -> u64 {
    10
}

/// Minimum content-axis hits for a book to appear on the timeline.
const fn default_min_timeline_hits() -> u64 {
    20
}

/// Notes shorter than this (after trimming) are rejected.
const fn default_min_note_chars() -> usize {
    100
}

/// Length of the key-finding snippet shown on the timeline.
const fn default_key_finding_chars() -> usize {
    200
}

/// Keyword count on both sides that marks a note as transitional.
const fn default_transitional_keyword_min() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ThresholdsConfig {
    #[serde(default = "default_stream_override_score")]
    pub stream_override_score: f64,

    #[serde(default = "default_min_override_hits")]
    pub min_override_hits: u64,

    #[serde(default = "default_min_timeline_hits")]
    pub min_timeline_hits: u64,

    #[serde(default = "default_min_note_chars")]
    pub min_note_chars: usize,

    #[serde(default = "default_key_finding_chars")]
    pub key_finding_chars: usize,

    #[serde(default = "default_transitional_keyword_min")]
    pub transitional_keyword_min: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            stream_override_score: default_stream_override_score(),
            min_override_hits: default_min_override_hits(),
            min_timeline_hits: default_min_timeline_hits(),
            min_note_chars: default_min_note_chars(),
            key_finding_chars: default_key_finding_chars(),
            transitional_keyword_min: default_transitional_keyword_min(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ThresholdsConfig::default();
        assert!((config.stream_override_score - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.min_override_hits, 10);
        assert_eq!(config.min_timeline_hits, 20);
        assert_eq!(config.min_note_chars, 100);
        assert_eq!(config.key_finding_chars, 200);
        assert_eq!(config.transitional_keyword_min, 3);
    }
}
