//! Keyword scanning of raw document text.

use tpf_core::score::{PairScan, ScanResult};

use crate::lexicon::{Lexicon, LexiconPair};

/// Lower-case `text` and turn hyphens, en/em dashes and slashes into spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '\u{2013}' | '\u{2014}' | '/' => ' ',
            other => other,
        })
        .collect()
}

/// Count every lexicon entry in `text`.
///
/// Each entry is searched in the normalized text and in the lower-cased
/// original; the larger count wins. `real-world` and `real world` both hit the
/// normalized form, while `p/e ratio` survives only in the original.
#[must_use]
pub fn scan(text: &str, lexicon: &Lexicon) -> ScanResult {
    let lowered = text.to_lowercase();
    let normalized = normalize(text);
    ScanResult::from_counts(lexicon.entries.iter().map(|entry| {
        let hits = entry.count_in(&normalized).max(entry.count_in(&lowered));
        (entry.label.as_str(), hits)
    }))
}

/// Scan `text` against both sides of an axis and derive its polarity score.
#[must_use]
pub fn scan_pair(text: &str, pair: &LexiconPair) -> PairScan {
    PairScan::new(scan(text, &pair.positive), scan(text, &pair.negative))
}
