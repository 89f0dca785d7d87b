//! Keyword scan results and the polarity score derived from them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of terms listed in a "top terms" diagnostic column.
pub const TOP_TERMS: usize = 5;

// ---------------------------------------------------------------------------
// PolarityScore
// ---------------------------------------------------------------------------

/// Signed ratio in `[-1, 1]` telling which of two vocabularies dominates.
///
/// `+1` is purely positive (academic / NPV), `-1` purely negative
/// (practitioner / EPS). No evidence at all is exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PolarityScore(f64);

impl PolarityScore {
    pub const NEUTRAL: Self = Self(0.0);

    /// `(positive - negative) / (positive + negative)`, or `0.0` without hits.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_hits(positive: u64, negative: u64) -> Self {
        let denom = positive + negative;
        if denom == 0 {
            return Self::NEUTRAL;
        }
        Self((positive as f64 - negative as f64) / denom as f64)
    }

    /// Wrap a score read back from a cache, clamping it into range.
    ///
    /// Non-finite input becomes neutral.
    #[must_use]
    pub fn from_cached(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(-1.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The score rounded half away from zero to `places` decimals.
    #[must_use]
    pub fn rounded(self, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (self.0 * factor).round() / factor
    }
}

impl fmt::Display for PolarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ScanResult
// ---------------------------------------------------------------------------

/// Hit count for a single lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TermHits {
    pub label: String,
    pub count: u64,
}

/// Keyword hits of one document against one lexicon.
///
/// `terms` holds only entries with at least one hit, in lexicon order.
/// `total_hits` is always the sum of their counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScanResult {
    pub total_hits: u64,
    pub terms: Vec<TermHits>,
}

impl ScanResult {
    /// Build a result from per-entry counts in lexicon order. Zero counts are dropped.
    #[must_use]
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let terms: Vec<TermHits> = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| TermHits {
                label: label.into(),
                count,
            })
            .collect();
        let total_hits = terms.iter().map(|t| t.count).sum();
        Self { total_hits, terms }
    }

    /// Count for a label, `0` when it never matched.
    #[must_use]
    pub fn hits(&self, label: &str) -> u64 {
        self.terms
            .iter()
            .find(|t| t.label == label)
            .map_or(0, |t| t.count)
    }

    /// The `n` most frequent terms, count descending, ties in lexicon order.
    #[must_use]
    pub fn top_terms(&self, n: usize) -> Vec<&TermHits> {
        let mut ranked: Vec<&TermHits> = self.terms.iter().collect();
        // Stable sort keeps encounter order among equal counts.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    /// Diagnostic column text: `label(count), label(count), ...`.
    #[must_use]
    pub fn format_top_terms(&self) -> String {
        self.top_terms(TOP_TERMS)
            .iter()
            .map(|t| format!("{}({})", t.label, t.count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Scan of one document against both sides of a lexicon pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PairScan {
    pub positive: ScanResult,
    pub negative: ScanResult,
    pub score: PolarityScore,
}

impl PairScan {
    #[must_use]
    pub fn new(positive: ScanResult, negative: ScanResult) -> Self {
        let score = PolarityScore::from_hits(positive.total_hits, negative.total_hits);
        Self {
            positive,
            negative,
            score,
        }
    }

    /// Total evidence behind the score.
    #[must_use]
    pub const fn evidence(&self) -> u64 {
        self.positive.total_hits + self.negative.total_hits
    }
}
