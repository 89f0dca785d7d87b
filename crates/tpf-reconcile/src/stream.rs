//! Stream resolution for one bibliography entry.
//!
//! The folder a PDF is filed under is a stronger signal than the Stream
//! column, and a decisive style-axis score is stronger than the folder.

use tpf_config::ThresholdsConfig;
use tpf_core::enums::Stream;
use tpf_scan::cache::StyleScoreRow;

/// Stream implied by the stored path, else the Stream column.
#[must_use]
pub fn folder_stream(path: &str, column: Stream) -> Stream {
    let lower = path.to_lowercase();
    if lower.contains("/academic/") || lower.contains("textbooks/academic") {
        Stream::Academic
    } else if lower.contains("/practitioner/") || lower.contains("textbooks/practitioner") {
        Stream::Practitioner
    } else {
        column
    }
}

/// The style-score override rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOverride {
    /// Minimum academic plus practitioner style hits.
    pub min_hits: u64,
    /// The score must lie strictly beyond ±threshold.
    pub threshold: f64,
}

impl StyleOverride {
    #[must_use]
    pub const fn from_thresholds(thresholds: &ThresholdsConfig) -> Self {
        Self {
            min_hits: thresholds.min_override_hits,
            threshold: thresholds.stream_override_score,
        }
    }

    /// Stream the style evidence points to, if it is strong enough.
    #[must_use]
    pub fn verdict(&self, style: &StyleScoreRow) -> Option<Stream> {
        if style.evidence() < self.min_hits {
            return None;
        }
        let score = style.polarity().value();
        if score > self.threshold {
            Some(Stream::Academic)
        } else if score < -self.threshold {
            Some(Stream::Practitioner)
        } else {
            None
        }
    }
}

/// Folder stream and final stream of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamResolution {
    pub folder_stream: Stream,
    pub stream: Stream,
    pub overridden: bool,
}

/// Apply the folder hint, then the style override when it disagrees.
#[must_use]
pub fn resolve_stream(
    path: &str,
    column: Stream,
    style: Option<&StyleScoreRow>,
    rule: StyleOverride,
) -> StreamResolution {
    let folder = folder_stream(path, column);
    match style.and_then(|row| rule.verdict(row)) {
        Some(verdict) if verdict != folder => StreamResolution {
            folder_stream: folder,
            stream: verdict,
            overridden: true,
        },
        _ => StreamResolution {
            folder_stream: folder,
            stream: folder,
            overridden: false,
        },
    }
}
