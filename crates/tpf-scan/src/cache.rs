//! The two CSV score caches.
//!
//! The scoring passes and the reconciliation build communicate only through
//! these files:
//!
//! - `scores.csv` (content axis): `filename, path, author, title, year,
//!   npv_hits, eps_hits, score, top_npv_terms, top_eps_terms`
//! - `stream_scores.csv` (style axis): `filename, path, acad_hits, prac_hits,
//!   stream_score, top_acad_terms, top_prac_terms`
//!
//! Both files always start with their header row, even when empty.
//!
//! Readers are lenient: cells are decoded lossily, an unparsable number reads
//! as zero, and a row without a filename or one the CSV reader rejects is
//! skipped. A missing cache file reads as empty.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tpf_core::Year;
use tpf_core::score::PolarityScore;
use tracing::{debug, warn};

use crate::error::ScanError;
use crate::pass::ScoredDocument;

/// Decimal places written for score columns.
pub const SCORE_PLACES: i32 = 4;

/// Header row of `scores.csv`.
pub const CONTENT_COLUMNS: [&str; 10] = [
    "filename",
    "path",
    "author",
    "title",
    "year",
    "npv_hits",
    "eps_hits",
    "score",
    "top_npv_terms",
    "top_eps_terms",
];

/// Header row of `stream_scores.csv`.
pub const STYLE_COLUMNS: [&str; 7] = [
    "filename",
    "path",
    "acad_hits",
    "prac_hits",
    "stream_score",
    "top_acad_terms",
    "top_prac_terms",
];

static FILENAME_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*-\s*(.+?)(?:\s*\((?:Book|Article|Report|Pamphlet)\s+(\d{4})\))?$")
        .expect("valid filename regex")
});

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

// ---------------------------------------------------------------------------
// Filename metadata
// ---------------------------------------------------------------------------

/// Author, title and year recovered from `Author - Title (Book 1951).pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMeta {
    pub author: String,
    pub title: String,
    /// `0` when the filename carries no year.
    pub year: Year,
}

impl FilenameMeta {
    #[must_use]
    pub fn parse(filename: &str) -> Self {
        let stem = Path::new(filename)
            .file_stem()
            .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned());

        if let Some(caps) = FILENAME_META.captures(&stem) {
            return Self {
                author: caps[1].trim().to_string(),
                title: caps[2].trim().to_string(),
                year: caps
                    .get(3)
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0),
            };
        }

        let year = FOUR_DIGITS
            .find(&stem)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        Self {
            author: String::new(),
            title: stem,
            year,
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScoreRow {
    pub filename: String,
    pub path: String,
    pub author: String,
    pub title: String,
    pub year: Year,
    pub npv_hits: u64,
    pub eps_hits: u64,
    pub score: f64,
    pub top_npv_terms: String,
    pub top_eps_terms: String,
}

impl ContentScoreRow {
    #[must_use]
    pub fn from_scored(scored: &ScoredDocument) -> Self {
        let meta = FilenameMeta::parse(&scored.document.filename);
        Self {
            filename: scored.document.filename.clone(),
            path: scored.document.rel_path.clone(),
            author: meta.author,
            title: meta.title,
            year: meta.year,
            npv_hits: scored.scan.positive.total_hits,
            eps_hits: scored.scan.negative.total_hits,
            score: scored.scan.score.rounded(SCORE_PLACES),
            top_npv_terms: scored.scan.positive.format_top_terms(),
            top_eps_terms: scored.scan.negative.format_top_terms(),
        }
    }

    /// NPV plus EPS hits.
    #[must_use]
    pub const fn evidence(&self) -> u64 {
        self.npv_hits + self.eps_hits
    }

    #[must_use]
    pub fn polarity(&self) -> PolarityScore {
        PolarityScore::from_cached(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleScoreRow {
    pub filename: String,
    pub path: String,
    pub acad_hits: u64,
    pub prac_hits: u64,
    pub stream_score: f64,
    pub top_acad_terms: String,
    pub top_prac_terms: String,
}

impl StyleScoreRow {
    #[must_use]
    pub fn from_scored(scored: &ScoredDocument) -> Self {
        Self {
            filename: scored.document.filename.clone(),
            path: scored.document.rel_path.clone(),
            acad_hits: scored.scan.positive.total_hits,
            prac_hits: scored.scan.negative.total_hits,
            stream_score: scored.scan.score.rounded(SCORE_PLACES),
            top_acad_terms: scored.scan.positive.format_top_terms(),
            top_prac_terms: scored.scan.negative.format_top_terms(),
        }
    }

    /// Academic plus practitioner style hits.
    #[must_use]
    pub const fn evidence(&self) -> u64 {
        self.acad_hits + self.prac_hits
    }

    #[must_use]
    pub fn polarity(&self) -> PolarityScore {
        PolarityScore::from_cached(self.stream_score)
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

fn write_rows<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<(), ScanError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote score cache");
    Ok(())
}

/// Write `scores.csv`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_content_scores(path: &Path, rows: &[ContentScoreRow]) -> Result<(), ScanError> {
    write_rows(path, &CONTENT_COLUMNS, rows)
}

/// Write `stream_scores.csv`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_style_scores(path: &Path, rows: &[StyleScoreRow]) -> Result<(), ScanError> {
    write_rows(path, &STYLE_COLUMNS, rows)
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Header-name lookup over one CSV file.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &csv::ByteRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (String::from_utf8_lossy(h).trim().to_string(), i))
                .collect(),
        )
    }

    fn text(&self, record: &csv::ByteRecord, name: &str) -> String {
        self.0
            .get(name)
            .and_then(|&i| record.get(i))
            .map(|v| String::from_utf8_lossy(v).trim().to_string())
            .unwrap_or_default()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn count(&self, record: &csv::ByteRecord, name: &str) -> u64 {
        let raw = self.text(record, name);
        raw.parse::<u64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u64))
            .unwrap_or(0)
    }

    fn float(&self, record: &csv::ByteRecord, name: &str) -> f64 {
        self.text(record, name)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

fn read_rows<T>(
    path: &Path,
    label: &str,
    build: impl Fn(&Columns, &csv::ByteRecord, String) -> T,
) -> Result<Vec<T>, ScanError> {
    if !path.exists() {
        warn!(path = %path.display(), "{label} not found, continuing without it");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = Columns::new(reader.byte_headers()?);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.byte_records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable {label} row");
                skipped += 1;
                continue;
            }
        };
        let filename = columns.text(&record, "filename");
        if filename.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(build(&columns, &record, filename));
    }
    debug!(path = %path.display(), rows = rows.len(), skipped, "read {label}");
    Ok(rows)
}

/// Read `scores.csv`. A missing file reads as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or has no
/// readable header row.
pub fn read_content_scores(path: &Path) -> Result<Vec<ContentScoreRow>, ScanError> {
    read_rows(path, "content score cache", |cols, rec, filename| ContentScoreRow {
        filename,
        path: cols.text(rec, "path"),
        author: cols.text(rec, "author"),
        title: cols.text(rec, "title"),
        year: u16::try_from(cols.count(rec, "year")).unwrap_or(0),
        npv_hits: cols.count(rec, "npv_hits"),
        eps_hits: cols.count(rec, "eps_hits"),
        score: cols.float(rec, "score"),
        top_npv_terms: cols.text(rec, "top_npv_terms"),
        top_eps_terms: cols.text(rec, "top_eps_terms"),
    })
}

/// Read `stream_scores.csv`. A missing file reads as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or has no
/// readable header row.
pub fn read_style_scores(path: &Path) -> Result<Vec<StyleScoreRow>, ScanError> {
    read_rows(path, "style score cache", |cols, rec, filename| StyleScoreRow {
        filename,
        path: cols.text(rec, "path"),
        acad_hits: cols.count(rec, "acad_hits"),
        prac_hits: cols.count(rec, "prac_hits"),
        stream_score: cols.float(rec, "stream_score"),
        top_acad_terms: cols.text(rec, "top_acad_terms"),
        top_prac_terms: cols.text(rec, "top_prac_terms"),
    })
}
