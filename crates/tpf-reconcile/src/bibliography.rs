//! Master bibliography loading.
//!
//! The bibliography is a spreadsheet exported to CSV. Header names come from
//! the first row verbatim (trimmed); every later row becomes one
//! [`BibliographyEntry`] through [`BibliographyEntry::from_record`].
//!
//! Spreadsheet exports are not always UTF-8, so cells are decoded lossily.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use tpf_core::entities::BibliographyEntry;
use tracing::{info, warn};

use crate::error::ReconcileError;

/// Read every row of the bibliography CSV. A missing file reads as empty.
///
/// Rows that are entirely blank are skipped. Short rows are padded with
/// empty cells. A row the CSV reader rejects is logged and skipped.
///
/// # Errors
///
/// [`ReconcileError::Bibliography`] when the file exists but cannot be opened
/// or its header row cannot be read.
pub fn load_bibliography(path: &Path) -> Result<Vec<BibliographyEntry>, ReconcileError> {
    if !path.exists() {
        warn!(path = %path.display(), "bibliography not found, continuing without it");
        return Ok(Vec::new());
    }

    let wrap = |source| ReconcileError::Bibliography {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(wrap)?;
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(wrap)?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for record in reader.byte_records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable bibliography row");
                skipped += 1;
                continue;
            }
        };
        let cells: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: HashMap<String, String> = headers
            .iter()
            .zip(cells)
            .map(|(h, v)| (h.clone(), v.into_owned()))
            .collect();
        entries.push(BibliographyEntry::from_record(&row));
    }

    info!(count = entries.len(), skipped, "bibliography loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tpf_core::enums::Stream;

    #[test]
    fn reads_rows_by_header_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bib.csv");
        std::fs::write(
            &path,
            "Author ,Title,Year,Stream,Have?,Our Filename,Our Path(s)\n\
             \"Graham, Benjamin\",Security Analysis,1934.0,Practitioner,YES,g.pdf,Textbooks/Practitioner/g.pdf\n\
             ,,,,,,\n\
             Dean,Capital Budgeting,1951\n",
        )
        .unwrap();

        let entries = load_bibliography(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Graham, Benjamin");
        assert_eq!(entries[0].year, Some(1934));
        assert_eq!(entries[0].stream, Stream::Practitioner);
        assert!(entries[0].have);
        assert_eq!(entries[1].author, "Dean");
        assert_eq!(entries[1].stream, Stream::Unset);
        assert_eq!(entries[1].filename, "");
    }

    #[test]
    fn latin1_row_does_not_lose_its_neighbours() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bib.csv");
        let mut bytes = b"Author,Title,Year,Stream\n\
            Dean,Capital Budgeting,1951,Practitioner\n"
            .to_vec();
        bytes.extend_from_slice(b"Cr\xe9mieux,Finance,1960,Practitioner\n");
        bytes.extend_from_slice(b"Graham,Security Analysis,1934,Practitioner\n");
        std::fs::write(&path, bytes).unwrap();

        let entries = load_bibliography(&path).unwrap();
        let authors: Vec<&str> = entries.iter().map(|e| e.author.as_str()).collect();
        assert_eq!(authors, vec!["Dean", "Cr\u{fffd}mieux", "Graham"]);
        assert_eq!(entries[1].year, Some(1960));
        assert_eq!(entries[2].year, Some(1934));
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_bibliography(&tmp.path().join("absent.csv")).unwrap().is_empty());
    }
}
