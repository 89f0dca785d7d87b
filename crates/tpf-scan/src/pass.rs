//! A full scoring pass over a corpus.
//!
//! Every document yields exactly one [`ScoredDocument`]. Extraction failures
//! and too-short texts become zero-evidence rows, so a single bad PDF never
//! aborts the batch.

use tpf_core::score::PairScan;
use tracing::{debug, info, warn};

use crate::extract::TextExtractor;
use crate::lexicon::LexiconPair;
use crate::scanner::scan_pair;
use crate::walk::CorpusDocument;

/// Per-pass extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOptions {
    /// Pages to read from the start of each document; `None` reads all.
    pub max_pages: Option<usize>,
    /// Texts shorter than this (in characters) are scored as zero evidence.
    pub min_text_chars: usize,
}

impl PassOptions {
    /// Full-text content scoring.
    #[must_use]
    pub const fn content(max_pages: Option<usize>, min_text_chars: usize) -> Self {
        Self {
            max_pages,
            min_text_chars,
        }
    }

    /// Front-matter style scoring: prefaces and introductions reveal the audience.
    #[must_use]
    pub const fn style(max_pages: usize) -> Self {
        Self {
            max_pages: Some(max_pages),
            min_text_chars: 0,
        }
    }
}

/// Why a document carries no evidence despite being in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Extraction(String),
    TooShort(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub document: CorpusDocument,
    pub scan: PairScan,
    pub skipped: Option<SkipReason>,
}

/// Result of [`run_pass`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassOutcome {
    pub documents: Vec<ScoredDocument>,
}

impl PassOutcome {
    /// Documents that failed extraction.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.skipped, Some(SkipReason::Extraction(_))))
            .count()
    }

    /// Scores (rounded to 4 places) of documents with at least one hit.
    #[must_use]
    pub fn evidenced_scores(&self) -> Vec<f64> {
        self.documents
            .iter()
            .filter(|d| d.scan.evidence() > 0)
            .map(|d| d.scan.score.rounded(4))
            .collect()
    }

    /// Five-bucket distribution of content scores.
    #[must_use]
    pub fn distribution(&self) -> ScoreDistribution {
        ScoreDistribution::from_scores(&self.evidenced_scores())
    }

    /// Three-way split of style scores around ±0.1.
    #[must_use]
    pub fn leaning(&self) -> Leaning {
        Leaning::from_scores(&self.evidenced_scores())
    }
}

/// Content-score histogram over documents with evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScoreDistribution {
    /// score < -0.3
    pub strong_eps: usize,
    /// -0.3 <= score < -0.1
    pub mild_eps: usize,
    /// -0.1 <= score <= 0.1
    pub center: usize,
    /// 0.1 < score <= 0.3
    pub mild_npv: usize,
    /// score > 0.3
    pub strong_npv: usize,
}

impl ScoreDistribution {
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut dist = Self::default();
        for &s in scores {
            if s < -0.3 {
                dist.strong_eps += 1;
            } else if s < -0.1 {
                dist.mild_eps += 1;
            } else if s <= 0.1 {
                dist.center += 1;
            } else if s <= 0.3 {
                dist.mild_npv += 1;
            } else {
                dist.strong_npv += 1;
            }
        }
        dist
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.strong_eps + self.mild_eps + self.center + self.mild_npv + self.strong_npv
    }
}

/// Style-score split over documents with evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Leaning {
    /// score > 0.1
    pub academic: usize,
    /// score < -0.1
    pub practitioner: usize,
    pub mixed: usize,
}

impl Leaning {
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut leaning = Self::default();
        for &s in scores {
            if s > 0.1 {
                leaning.academic += 1;
            } else if s < -0.1 {
                leaning.practitioner += 1;
            } else {
                leaning.mixed += 1;
            }
        }
        leaning
    }
}

/// Extract, scan and score every document in order.
///
/// `on_progress` is called after each document with its 0-based index.
pub fn run_pass<E, F>(
    documents: &[CorpusDocument],
    extractor: &E,
    pair: &LexiconPair,
    options: PassOptions,
    mut on_progress: F,
) -> PassOutcome
where
    E: TextExtractor + ?Sized,
    F: FnMut(usize, &CorpusDocument),
{
    let mut scored = Vec::with_capacity(documents.len());

    for (index, document) in documents.iter().enumerate() {
        let (scan, skipped) = match extractor.extract(&document.full_path, options.max_pages) {
            Ok(text) => {
                let chars = text.chars().count();
                if chars < options.min_text_chars {
                    debug!(file = %document.filename, chars, "text too short, scoring as zero");
                    (PairScan::default(), Some(SkipReason::TooShort(chars)))
                } else {
                    (scan_pair(&text, pair), None)
                }
            }
            Err(e) => {
                warn!(file = %document.filename, error = %e, "extraction failed, scoring as zero");
                (PairScan::default(), Some(SkipReason::Extraction(e.to_string())))
            }
        };

        debug!(
            file = %document.filename,
            positive = scan.positive.total_hits,
            negative = scan.negative.total_hits,
            score = %scan.score,
            "scored document"
        );

        scored.push(ScoredDocument {
            document: document.clone(),
            scan,
            skipped,
        });
        on_progress(index, document);
    }

    let outcome = PassOutcome { documents: scored };
    info!(
        axis = %pair.axis,
        documents = outcome.documents.len(),
        with_hits = outcome.evidenced_scores().len(),
        failures = outcome.failures(),
        "scoring pass complete"
    );
    outcome
}
