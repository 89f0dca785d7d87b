//! Title, year and author inference.
//!
//! Note filenames follow `<Topic>_<CamelCaseNames><Year>_<Subject>.md`
//! (`Valuation_Dean1951_CapitalBudgeting.md`), titles usually read
//! `Author (Year): Subject`. Either source can be missing or irregular.

use regex::Regex;
use std::sync::LazyLock;
use tpf_core::Year;

static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)").expect("valid h1 regex"));

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})").expect("valid year regex"));

static PAREN_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{4})\)").expect("valid paren-year regex"));

static FILENAME_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+_([A-Za-z]+?)(\d{4})").expect("valid filename-author regex")
});

static CAPITALIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+").expect("valid name-token regex"));

static TITLE_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\(\d{4}\)").expect("valid title-author regex"));

/// Text of the first `# Heading` line, if any.
#[must_use]
pub fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| H1.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

fn parse_year(digits: &str) -> Option<Year> {
    digits.parse::<Year>().ok().filter(|y| *y > 0)
}

/// Primary year: first 4-digit run in the filename, then `(dddd)` in the
/// title, then any 4-digit run in the title.
#[must_use]
pub fn extract_year(title: &str, filename: &str) -> Option<Year> {
    if let Some(caps) = FOUR_DIGITS.captures(filename) {
        return parse_year(&caps[1]);
    }
    PAREN_YEAR
        .captures(title)
        .or_else(|| FOUR_DIGITS.captures(title))
        .and_then(|caps| parse_year(&caps[1]))
}

/// Author names from the filename's CamelCase run, else from a leading
/// `Name (Year)` in the title.
///
/// `EPS_GrahamHarveyRajgopal2005_Survey.md` gives `Graham, Harvey, Rajgopal`.
/// A run with no capitalized tokens (`MM1963`) is returned as is.
#[must_use]
pub fn extract_author(title: &str, filename: &str) -> String {
    if let Some(caps) = FILENAME_AUTHOR.captures(filename) {
        let raw = &caps[1];
        let parts: Vec<&str> = CAPITALIZED.find_iter(raw).map(|m| m.as_str()).collect();
        if parts.is_empty() {
            return raw.to_string();
        }
        return parts.join(", ");
    }
    TITLE_AUTHOR
        .captures(title)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}
