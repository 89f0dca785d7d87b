//! Keyword vocabularies for the two scoring axes.
//!
//! Each axis has a positive list (academic style / NPV vocabulary) and a
//! negative list (practitioner style / EPS vocabulary). Entries are
//! `(label, pattern, word_boundary)`; patterns are matched case-insensitively
//! against lower-cased text, and a word-boundary entry is wrapped in `\b..\b`
//! so short acronyms like `eps` or `roe` never match inside other words.
//!
//! Several generic terms were dropped after producing hundreds of false
//! positives in pre-1950 books: bare `beta` (Greek letter in any formula),
//! `factors` (factors of production), `merton` (place names), `signaling`
//! (railway and military signals) and `cml`.

use regex::{Regex, RegexBuilder};
use tpf_core::enums::Axis;

use crate::error::ScanError;

/// A raw lexicon table: `(label, pattern, word_boundary)`.
pub type LexiconTable = [(&'static str, &'static str, bool)];

// ── Style axis ────────────────────────────────────────────────────

/// Writing that belongs to textbooks, papers and courses.
pub const ACADEMIC_STYLE: &LexiconTable = &[
    // Formal theory
    ("theorem", "theorem", true),
    ("proposition", "proposition", true),
    ("lemma", "lemma", true),
    ("proof", "proof", true),
    ("corollary", "corollary", true),
    ("equilibrium", "equilibrium", true),
    ("optimal", "optimal", true),
    ("maximize utility", r"maximi[sz]e.{0,10}utility", false),
    ("social welfare", "social welfare", false),
    // Econometrics and statistics
    ("regression", "regression", true),
    ("coefficient", "coefficient", true),
    ("standard error", "standard error", false),
    ("t-statistic", "t.statistic", false),
    ("p-value", "p.value", false),
    ("OLS", "ols", true),
    ("panel data", "panel data", false),
    ("instrumental variable", "instrumental variable", false),
    ("fixed effects", "fixed effects", false),
    ("heteroskedast", "heterosk?edast", false),
    ("endogen", r"\bendogen", false),
    ("R-squared", "r.squared", false),
    // Citation patterns
    ("et al.", "et al", true),
    ("Journal of Finance", "journal of finance", false),
    ("Journal of Financial Economics", "journal of financial economics", false),
    ("Review of Financial Studies", "review of financial studies", false),
    ("American Economic Review", "american economic review", false),
    ("Quarterly Journal", "quarterly journal", false),
    ("working paper", "working paper", false),
    ("forthcoming", "forthcoming", true),
    // Framing
    ("literature review", "literature review", false),
    ("empirical evidence", "empirical evidence", false),
    ("the model", "the model", true),
    ("we show that", "we show that", false),
    ("we find that", "we find that", false),
    ("we derive", "we derive", false),
    ("we assume", "we assume", false),
    ("testable implication", "testable implication", false),
    ("null hypothesis", "null hypothesis", false),
    // Audience: courses and classrooms
    ("textbook", "textbook", true),
    ("course", "courses?", true),
    ("end-of-chapter", "end.of.chapter", false),
    ("problem sets", r"problem sets?\b", false),
    ("exercises", r"chapter.{0,10}exercises?\b", false),
    ("instructor", r"\binstructor", false),
    ("solutions manual", "solutions manual", false),
    ("syllabus", "syllabus", true),
    ("curriculum", "curriculum", true),
    ("prerequisite", "prerequisites?", true),
    ("undergraduate", "undergraduate", true),
    ("graduate students", r"graduate.{0,10}student", false),
    ("MBA students", "mba", true),
    ("classroom", "classroom", true),
    ("semester", "semester", true),
    ("university press", "university press", false),
    ("suggested readings", "suggested readings?", false),
    ("further reading", "further reading", false),
    ("review questions", "review questions", false),
    ("study questions", "study questions", false),
    ("learning objectives", "learning objectives?", false),
    ("designed for students", r"designed for.{0,20}student", false),
];

/// Writing that belongs to how-to guides, Wall Street manuals and CFO handbooks.
pub const PRACTITIONER_STYLE: &LexiconTable = &[
    // How-to
    ("how to", "how to", false),
    ("step by step", "step.by.step", false),
    ("rule of thumb", "rule of thumb", false),
    ("in practice", "in practice", false),
    ("practical", "practical", true),
    ("tip", "tips?", true),
    ("guide", "guide", true),
    ("handbook", "handbook", true),
    ("checklist", "checklist", true),
    ("best practice", "best practice", false),
    ("real-world", "real.world", false),
    ("case study", "case stud", false),
    // Industry and market language
    ("Wall Street", "wall street", false),
    ("Main Street", "main street", false),
    ("broker", "broker", true),
    ("trader", "trader", true),
    ("portfolio manager", "portfolio manager", false),
    ("fund manager", "fund manager", false),
    ("money manager", "money manager", false),
    ("investment banker", "investment banker", false),
    ("pitch book", "pitch book", false),
    ("due diligence", "due diligence", false),
    ("term sheet", "term sheet", false),
    // Personal and retail
    ("your portfolio", "your portfolio", false),
    ("your money", "your money", false),
    ("your investment", "your investment", false),
    ("retirement", "retirement", true),
    ("financial planning", "financial planning", false),
    ("wealth management", "wealth management", false),
    ("financial advisor", "financial advisor", false),
    ("personal finance", "personal finance", false),
    ("nest egg", "nest egg", false),
    ("bottom line", "bottom line", false),
    // Business operations
    ("CFO", "cfo", true),
    ("CEO", "ceo", true),
    ("board of directors", "board of directors", false),
    ("compliance", "compliance", true),
    // Audience: practitioners
    ("written for practitioners", r"written for.{0,20}practitioner", false),
    ("written for executives", r"written for.{0,20}executive", false),
    ("written for managers", r"written for.{0,20}manager", false),
    ("written for investors", r"written for.{0,20}investor", false),
    ("a guide for", "a guide for", false),
    ("for the practicing", "for the practicing", false),
    ("you will learn", "you will learn", false),
    ("the reader will", "the reader will", false),
    ("readers will", "readers will", false),
    ("client", "clients?", true),
    ("plain English", "plain english", false),
    ("no-nonsense", "no.nonsense", false),
    ("straightforward", "straightforward", true),
    ("bottom-line", "bottom.line", false),
    ("actionable", "actionable", true),
    ("proven strategies", r"proven.{0,10}strateg", false),
    ("secrets of", "secrets of", false),
    ("insider", "insider", true),
];

// ── Content axis ──────────────────────────────────────────────────

/// Vocabulary of the NPV / CAPM / no-arbitrage paradigm.
pub const NPV_TERMS: &LexiconTable = &[
    // Capital structure and payout
    ("modigliani and miller", r"modigliani.{1,5}miller", false),
    ("miller-modigliani", r"miller.{1,5}modigliani", false),
    ("irrelevance proposition", "irrelevance proposition", false),
    ("proposition i", r"proposition\s+i\b", false),
    ("proposition ii", r"proposition\s+ii\b", false),
    ("homemade leverage", "homemade leverage", false),
    ("perfect capital markets", "perfect capital market", false),
    ("tax shield", "tax shield", false),
    ("interest tax shield", "interest tax shield", false),
    // Value criterion and capital budgeting
    ("present value", "present value", false),
    ("net present value", "net present value", false),
    ("npv", "npv", true),
    ("discounted cash flow", "discounted cash flow", false),
    ("dcf", "dcf", true),
    ("incremental cash flow", "incremental cash flow", false),
    ("opportunity cost", "opportunity cost", false),
    ("sunk cost", "sunk cost", false),
    (
        "weighted average cost of capital",
        "weighted average cost of capital",
        false,
    ),
    ("wacc", "wacc", true),
    ("risk-adjusted discount rate", "risk.adjusted discount rate", false),
    ("free cash flow", "free cash flow", false),
    ("fcf", "fcf", true),
    ("terminal value", "terminal value", false),
    ("perpetuity growth", "perpetuity growth", false),
    ("gordon growth model", r"gordon.{0,10}(growth|model)", false),
    ("gordon model", r"gordon.{0,5}model", false),
    // Risk and expected return
    ("capm", "capm", true),
    ("capital asset pricing", "capital asset pricing", false),
    ("beta coefficient", "beta coefficient", false),
    ("stock beta", "stock.s? beta", false),
    ("portfolio beta", "portfolio beta", false),
    ("equity beta", "equity beta", false),
    ("asset beta", "asset beta", false),
    ("unlevered beta", "unlevered beta", false),
    ("levered beta", "levered beta", false),
    ("systematic risk", "systematic risk", false),
    ("security market line", "security market line", false),
    ("sml", "sml", true),
    ("capital market line", "capital market line", false),
    ("efficient frontier", "efficient frontier", false),
    ("mean-variance", "mean.variance", false),
    ("markowitz", "markowitz", false),
    ("portfolio theory", "portfolio theory", false),
    ("factor model", "factor model", false),
    ("fama-french", "fama.french", false),
    ("risk premium", "risk premium", false),
    ("expected return", "expected return", false),
    // Markets and information
    ("efficient market", "efficient market", false),
    ("emh", "emh", true),
    ("random walk", "random walk", false),
    ("event study", "event stud", false),
    // No-arbitrage and derivatives
    ("no-arbitrage", "no.arbitrage", false),
    ("arbitrage pricing", "arbitrage pricing", false),
    ("option pricing", "option pricing", false),
    ("black-scholes", "black.scholes", false),
    ("merton model", r"merton.{0,5}model", false),
    ("robert merton", r"robert.{0,5}merton", false),
    ("put-call parity", "put.call parity", false),
    ("contingent claim", "contingent claim", false),
    ("state-contingent", "state.contingent", false),
    // Pre-1900 discounting vocabulary
    ("present worth", "present worth", false),
    ("discounted value", "discounted value", false),
    ("time value of money", "time value of money", false),
    // Agency and information frictions
    ("agency cost", "agency cost", false),
    ("jensen-meckling", "jensen.meckling", false),
    ("information asymmetry", "information asymmetr", false),
    ("signaling model", "signal(?:ing|ling) model", false),
    ("signaling theory", "signal(?:ing|ling) theory", false),
    ("signaling equilibrium", "signal(?:ing|ling) equilibri", false),
    ("pecking order", "pecking order", false),
    ("trade-off theory", "trade.off theory", false),
    ("tradeoff theory", "tradeoff theory", false),
];

/// Vocabulary of the earnings-capitalization paradigm.
pub const EPS_TERMS: &LexiconTable = &[
    // Objective in accounting terms
    ("earnings per share", "earnings per share", false),
    ("eps", "eps", true),
    ("street eps", "street eps", false),
    ("per share", "per share", false),
    ("maximize net income", "maximi[sz]e net income", false),
    ("return on equity", "return on equity", false),
    ("roe", "roe", true),
    ("return on capital", "return on capital", false),
    ("accretive/accretion", "accreti", false),
    ("dilutive/dilution", "diluti", false),
    ("earnings yield", "earnings yield", false),
    // Capital structure without MM
    ("traditional theory", "traditional theory", false),
    ("optimal capital structure", "optimal capital structure", false),
    ("minimum cost of capital", "minimum cost of capital", false),
    ("net income approach", "net income approach", false),
    (
        "net operating income approach",
        "net operating income approach",
        false,
    ),
    ("trading on the equity", "trading on the equity", false),
    ("ebit-eps", "ebit.eps", false),
    ("eps indifference", "eps indifference", false),
    ("indifference point", "indifference point", false),
    // Valuation via multiples
    ("price-to-earnings", "price.to.earnings", false),
    ("price-earnings", "price.earnings", false),
    ("p/e ratio", "p/?e ratio", false),
    ("pe ratio", "pe ratio", true),
    ("earning power", "earning power", false),
    ("capitalization of earnings", "capitali[sz]ation of earnings", false),
    ("capitalization rate", "capitali[sz]ation rate", false),
    ("cap rate", "cap rate", true),
    ("comparables", "comparables", false),
    ("comps", "comps", true),
    ("relative valuation", "relative valuation", false),
    ("valuation multiple", "valuation multiple", false),
    ("trading multiple", "trading multiple", false),
    ("ebitda", "ebitda", true),
    ("book value", "book value", false),
    ("price to book", "price.to.book", false),
    // Investment rules that are not value-based
    ("payback period", "payback period", false),
    ("accounting rate of return", "accounting rate of return", false),
    ("average rate of return", "average rate of return", false),
    // Risk via accounting safety
    ("margin of safety", "margin of safety", false),
    ("coverage ratio", "coverage ratio", false),
    ("times interest earned", "times interest earned", false),
    ("debt capacity", "debt capacity", false),
    // Pre-1900 earnings-capitalization vocabulary
    ("intrinsic value", "intrinsic value", false),
    ("dividend yield", "dividend yield", false),
    ("par value", "par value", false),
    ("earning capacity", "earning capacity", false),
    ("rate of return", "rate of return", true),
    // Practitioner language
    ("consensus estimate", "consensus estimate", false),
    ("analyst estimate", "analyst estimate", false),
    ("non-gaap", "non.gaap", false),
    ("adjusted earnings", "adjusted earnings", false),
    ("run-rate", "run.rate", false),
];

// ── Compiled lexicons ─────────────────────────────────────────────

/// One compiled vocabulary term.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub label: String,
    pub pattern: Regex,
    pub word_boundary: bool,
}

impl LexiconEntry {
    /// Compile a term. Word-boundary terms are anchored on token boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if the pattern is not a valid regex.
    pub fn new(label: &str, pattern: &str, word_boundary: bool) -> Result<Self, ScanError> {
        let source = if word_boundary {
            format!(r"\b(?:{pattern})\b")
        } else {
            pattern.to_string()
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source| ScanError::Pattern {
                label: label.to_string(),
                source,
            })?;
        Ok(Self {
            label: label.to_string(),
            pattern,
            word_boundary,
        })
    }

    /// Non-overlapping matches of this term in `text`.
    #[must_use]
    pub fn count_in(&self, text: &str) -> u64 {
        self.pattern.find_iter(text).count() as u64
    }
}

/// An ordered list of compiled terms.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub name: String,
    pub entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Compile a lexicon table, preserving entry order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] for the first invalid pattern.
    pub fn compile(name: &str, table: &LexiconTable) -> Result<Self, ScanError> {
        let entries = table
            .iter()
            .map(|(label, pattern, wb)| LexiconEntry::new(label, pattern, *wb))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The positive and negative vocabularies of one scoring axis.
#[derive(Debug, Clone)]
pub struct LexiconPair {
    pub axis: Axis,
    /// Academic style, or NPV vocabulary.
    pub positive: Lexicon,
    /// Practitioner style, or EPS vocabulary.
    pub negative: Lexicon,
}

impl LexiconPair {
    #[must_use]
    pub const fn new(axis: Axis, positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            axis,
            positive,
            negative,
        }
    }

    /// Academic-style vs practitioner-style writing and audience.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if a built-in pattern fails to compile.
    pub fn style() -> Result<Self, ScanError> {
        Ok(Self::new(
            Axis::Style,
            Lexicon::compile("academic_style", ACADEMIC_STYLE)?,
            Lexicon::compile("practitioner_style", PRACTITIONER_STYLE)?,
        ))
    }

    /// NPV-paradigm vs EPS-paradigm valuation vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if a built-in pattern fails to compile.
    pub fn content() -> Result<Self, ScanError> {
        Ok(Self::new(
            Axis::Content,
            Lexicon::compile("npv", NPV_TERMS)?,
            Lexicon::compile("eps", EPS_TERMS)?,
        ))
    }

    /// Built-in pair for an axis.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if a built-in pattern fails to compile.
    pub fn for_axis(axis: Axis) -> Result<Self, ScanError> {
        match axis {
            Axis::Style => Self::style(),
            Axis::Content => Self::content(),
        }
    }
}
