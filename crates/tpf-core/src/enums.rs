//! Categorical values used across the pipeline.
//!
//! Paradigms serialize in kebab-case (`pre-split`) because the rendered site
//! keys its colors and labels on those strings. Streams keep the capitalized
//! spelling used by the bibliography spreadsheet.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Year;
use crate::errors::CoreError;

/// First year of the academic revolution (Modigliani-Miller, Markowitz).
pub const SPLIT_START: Year = 1958;

/// Last year of the revolution; from the following year on the streams diverge.
pub const SPLIT_END: Year = 1963;

// ---------------------------------------------------------------------------
// Paradigm
// ---------------------------------------------------------------------------

/// The valuation convention a document follows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Paradigm {
    /// Earnings capitalization: P = EPS x P/E from comparables.
    Practitioner,
    /// Discounted cash flow, CAPM, value maximization.
    Academic,
    /// Straddles both conventions.
    Transitional,
    /// Before 1958, when everyone used the same framework.
    PreSplit,
}

impl Paradigm {
    pub const ALL: [Self; 4] = [
        Self::Practitioner,
        Self::Academic,
        Self::Transitional,
        Self::PreSplit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Practitioner => "practitioner",
            Self::Academic => "academic",
            Self::Transitional => "transitional",
            Self::PreSplit => "pre-split",
        }
    }

    /// Human-readable label used in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Practitioner => "Practitioner Paradigm",
            Self::Academic => "Academic Paradigm",
            Self::Transitional => "Transitional",
            Self::PreSplit => "Pre-Split Consensus",
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Paradigm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "paradigm",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Stream
// ---------------------------------------------------------------------------

/// Bibliography-level classification of a book, independent of keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Stream {
    Academic,
    Practitioner,
    Both,
    /// Column empty or holding a value outside the three known streams.
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Stream {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Practitioner => "Practitioner",
            Self::Both => "Both",
            Self::Unset => "",
        }
    }

    /// Lenient parse of a spreadsheet cell. Anything unrecognized is `Unset`.
    #[must_use]
    pub fn from_cell(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "academic" => Self::Academic,
            "practitioner" => Self::Practitioner,
            "both" => Self::Both,
            _ => Self::Unset,
        }
    }

    /// Timeline paradigm for a bibliography stream.
    ///
    /// `Both` maps to academic; an unset stream falls back to practitioner.
    #[must_use]
    pub const fn paradigm(self) -> Paradigm {
        match self {
            Self::Academic | Self::Both => Paradigm::Academic,
            Self::Practitioner | Self::Unset => Paradigm::Practitioner,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Era
// ---------------------------------------------------------------------------

/// Historical period a publication year falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// 1720-1957: practitioners and scholars alike capitalize earnings.
    Consensus,
    /// 1958-1963: value maximization replaces earnings maximization in academia.
    Revolution,
    /// 1964 onward: textbooks teach NPV, practice keeps EPS x P/E.
    Divergence,
}

impl Era {
    #[must_use]
    pub const fn of(year: Year) -> Self {
        if year < SPLIT_START {
            Self::Consensus
        } else if year <= SPLIT_END {
            Self::Revolution
        } else {
            Self::Divergence
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consensus => "consensus",
            Self::Revolution => "revolution",
            Self::Divergence => "divergence",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consensus => "The Consensus Era",
            Self::Revolution => "The Revolution",
            Self::Divergence => "The Great Divergence",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Which lexicon pair a scan ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Writing style and target audience: academic-style vs practitioner-style.
    Style,
    /// Valuation content: NPV-style vs EPS-style vocabulary.
    Content,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn paradigm_serializes_kebab_case() {
        let json = serde_json::to_string(&Paradigm::PreSplit).unwrap();
        assert_eq!(json, "\"pre-split\"");
        let back: Paradigm = serde_json::from_str("\"transitional\"").unwrap();
        assert_eq!(back, Paradigm::Transitional);
    }

    #[rstest]
    #[case("academic", Paradigm::Academic)]
    #[case("Practitioner", Paradigm::Practitioner)]
    #[case("pre_split", Paradigm::PreSplit)]
    #[case(" pre-split ", Paradigm::PreSplit)]
    fn paradigm_from_str(#[case] raw: &str, #[case] expected: Paradigm) {
        assert_eq!(raw.parse::<Paradigm>().unwrap(), expected);
    }

    #[test]
    fn paradigm_from_str_rejects_unknown() {
        let err = "keynesian".parse::<Paradigm>().unwrap_err();
        assert!(err.to_string().contains("keynesian"));
    }

    #[rstest]
    #[case("Academic", Stream::Academic)]
    #[case(" practitioner ", Stream::Practitioner)]
    #[case("BOTH", Stream::Both)]
    #[case("", Stream::Unset)]
    #[case("Railway", Stream::Unset)]
    fn stream_from_cell(#[case] raw: &str, #[case] expected: Stream) {
        assert_eq!(Stream::from_cell(raw), expected);
    }

    #[test]
    fn stream_paradigm_mapping() {
        assert_eq!(Stream::Academic.paradigm(), Paradigm::Academic);
        assert_eq!(Stream::Both.paradigm(), Paradigm::Academic);
        assert_eq!(Stream::Practitioner.paradigm(), Paradigm::Practitioner);
        assert_eq!(Stream::Unset.paradigm(), Paradigm::Practitioner);
    }

    #[rstest]
    #[case(1720, Era::Consensus)]
    #[case(1957, Era::Consensus)]
    #[case(1958, Era::Revolution)]
    #[case(1963, Era::Revolution)]
    #[case(1964, Era::Divergence)]
    fn era_boundaries(#[case] year: Year, #[case] expected: Era) {
        assert_eq!(Era::of(year), expected);
    }
}
