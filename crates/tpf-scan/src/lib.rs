//! # tpf-scan
//!
//! Offline keyword scoring of the PDF corpus.
//!
//! - [`lexicon`]: the style-axis and content-axis vocabularies, compiled once
//! - [`scanner`]: hit counting and polarity scoring of raw text
//! - [`walk`]: corpus enumeration with administrative subtrees excluded
//! - [`extract`]: the PDF text-extraction seam and its `lopdf` implementation
//! - [`pass`]: a full scoring pass over a corpus, failure-tolerant per document
//! - [`cache`]: the two CSV score caches written by the passes

pub mod cache;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod pass;
pub mod scanner;
pub mod walk;

pub use cache::{ContentScoreRow, FilenameMeta, StyleScoreRow};
pub use error::ScanError;
pub use extract::{PdfTextExtractor, TextExtractor};
pub use lexicon::{Lexicon, LexiconEntry, LexiconPair};
pub use pass::{
    Leaning, PassOptions, PassOutcome, ScoreDistribution, ScoredDocument, SkipReason, run_pass,
};
pub use scanner::{scan, scan_pair};
pub use walk::{CorpusDocument, collect_documents};
