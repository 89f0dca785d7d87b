use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Year;
use crate::enums::{Paradigm, Stream};
use crate::score::PolarityScore;

/// Reconciled classification of one bibliography document.
///
/// `resolved_paradigm` is derived from the other fields and is never edited
/// by hand.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassificationRecord {
    pub filename: String,
    pub path: String,
    pub year: Option<Year>,
    /// Content-axis (NPV vs EPS) score, neutral when the document was never scanned.
    pub content_score: PolarityScore,
    pub content_evidence: u64,
    /// Style-axis score, absent when the style pass has no row for the file.
    pub style_score: Option<PolarityScore>,
    pub style_evidence: u64,
    /// Stream after the folder hint, before the style override.
    pub folder_stream: Stream,
    pub stream: Stream,
    pub stream_overridden: bool,
    /// Whether the content evidence clears the timeline gate.
    pub on_timeline: bool,
    pub resolved_paradigm: Paradigm,
}
