//! Four-way paradigm classification of a text.
//!
//! Rules, first match wins:
//!
//! 1. Year before 1958: pre-split.
//! 2. Year within 1958-1963: transitional.
//! 3. At least three keywords from each list: transitional.
//! 4. More academic than practitioner keywords: academic, and vice versa.
//! 5. A tie falls back to [`TIE_PARADIGM`].
//!
//! Keywords count once each, by case-insensitive substring containment.

use tpf_config::{KeywordsConfig, ThresholdsConfig};
use tpf_core::Year;
use tpf_core::enums::{Paradigm, SPLIT_END, SPLIT_START};

/// Label for a keyword tie in the post-split era or without a year.
pub const TIE_PARADIGM: Paradigm = Paradigm::Academic;

pub const PRACTITIONER_KEYWORDS: &[&str] = &[
    "earnings yield",
    "earnings capitalization",
    "capitalize earnings",
    "capitalization rate",
    "cap rate",
    "earning power",
    "comps",
    "comparables",
    "P/E",
    "price-earnings",
    "earnings-price",
    "EPS maximiz",
    "maximize EPS",
    "EPS accret",
    "practitioner",
    "trading on equity",
    "Wall Street",
    "analyst forecast",
    "relative valuation",
    "multiples",
];

pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "NPV",
    "net present value",
    "CAPM",
    "capital asset pricing",
    "efficient market",
    "Modigliani-Miller",
    "M&M",
    "MM",
    "beta",
    "factor model",
    "arbitrage pricing",
    "Black-Scholes",
    "option pricing",
    "maximize value",
    "maximize firm value",
    "market value maximiz",
    "DCF",
    "discounted cash flow",
    "PVGO",
    "present value of growth",
];

/// How many keywords of each list a text contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordCounts {
    pub practitioner: usize,
    pub academic: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmClassifier {
    practitioner: Vec<String>,
    academic: Vec<String>,
    transitional_min: usize,
}

impl Default for ParadigmClassifier {
    fn default() -> Self {
        Self::new(
            PRACTITIONER_KEYWORDS.iter().copied(),
            ACADEMIC_KEYWORDS.iter().copied(),
            3,
        )
    }
}

impl ParadigmClassifier {
    pub fn new<P, A, S>(practitioner: P, academic: A, transitional_min: usize) -> Self
    where
        P: IntoIterator<Item = S>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fold = |kw: S| kw.as_ref().to_lowercase();
        Self {
            practitioner: practitioner.into_iter().map(fold).collect(),
            academic: academic.into_iter().map(fold).collect(),
            transitional_min,
        }
    }

    /// Built-in lists, replaced wholesale by any configured override.
    #[must_use]
    pub fn from_config(keywords: &KeywordsConfig, thresholds: &ThresholdsConfig) -> Self {
        let practitioner: Vec<String> = keywords.practitioner.clone().unwrap_or_else(|| {
            PRACTITIONER_KEYWORDS.iter().map(|s| (*s).to_string()).collect()
        });
        let academic: Vec<String> = keywords
            .academic
            .clone()
            .unwrap_or_else(|| ACADEMIC_KEYWORDS.iter().map(|s| (*s).to_string()).collect());
        Self::new(practitioner, academic, thresholds.transitional_keyword_min)
    }

    #[must_use]
    pub fn keyword_counts(&self, text: &str) -> KeywordCounts {
        let folded = text.to_lowercase();
        let count = |list: &[String]| list.iter().filter(|kw| folded.contains(kw.as_str())).count();
        KeywordCounts {
            practitioner: count(&self.practitioner),
            academic: count(&self.academic),
        }
    }

    #[must_use]
    pub fn classify(&self, text: &str, year: Option<Year>) -> Paradigm {
        match year {
            Some(y) if y < SPLIT_START => return Paradigm::PreSplit,
            Some(y) if y <= SPLIT_END => return Paradigm::Transitional,
            _ => {}
        }

        let counts = self.keyword_counts(text);
        if counts.practitioner >= self.transitional_min && counts.academic >= self.transitional_min {
            return Paradigm::Transitional;
        }
        match counts.academic.cmp(&counts.practitioner) {
            std::cmp::Ordering::Greater => Paradigm::Academic,
            std::cmp::Ordering::Less => Paradigm::Practitioner,
            std::cmp::Ordering::Equal => TIE_PARADIGM,
        }
    }
}
