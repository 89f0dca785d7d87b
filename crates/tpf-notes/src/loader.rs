//! Loading every note in the research-notes directory.

use std::fs;
use std::path::Path;
use tpf_config::NotesConfig;
use tpf_core::entities::ResearchNote;
use tracing::{debug, info, warn};

use crate::error::NoteError;
use crate::parser::NoteParser;

/// Parse every `*.md` file directly inside `dir`.
///
/// Excluded filenames and hidden files are skipped. Files that cannot be read
/// or are rejected by the parser are logged and left out. Bytes that are not
/// valid UTF-8 are replaced. The result is sorted by year, notes without a
/// year last, then by title.
///
/// A missing directory yields no notes.
///
/// # Errors
///
/// Returns [`NoteError::Io`] if `dir` exists but cannot be listed.
pub fn load_notes(
    dir: &Path,
    config: &NotesConfig,
    parser: &NoteParser,
) -> Result<Vec<ResearchNote>, NoteError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "research notes directory not found, continuing without notes");
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    // read_dir order is platform-dependent
    paths.sort();

    let mut notes = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(filename) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if filename.starts_with('.') || config.is_excluded(&filename) {
            debug!(file = %filename, "note excluded");
            continue;
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => {
                warn!(error = %NoteError::Read { path: path.clone(), source }, "skipping note");
                continue;
            }
        };
        let raw = String::from_utf8_lossy(&bytes);

        match parser.parse(&raw, &filename) {
            Ok(note) => notes.push(note),
            Err(e) => debug!(file = %filename, error = %e, "note rejected"),
        }
    }

    notes.sort_by(|a, b| {
        let key = |n: &ResearchNote| (n.year.is_none(), n.year);
        key(a).cmp(&key(b)).then_with(|| a.title.cmp(&b.title))
    });

    info!(count = notes.len(), "research notes loaded");
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    fn padded(title: &str) -> String {
        format!("# {title}\n\n## Key Finding\n{}\n", "finding ".repeat(20))
    }

    #[test]
    fn loads_sorts_and_filters() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        write(dir, "Valuation_Williams1938_InvestmentValue.md", &padded("Williams (1938)"));
        write(dir, "Valuation_Dean1951_CapitalBudgeting.md", &padded("Dean (1951)"));
        write(dir, "Essay_Undated.md", &padded("B undated"));
        write(dir, "Another_Undated.md", &padded("A undated"));
        write(dir, "Capitalization_vs_Discounting.md", &padded("Excluded"));
        write(dir, "Stub_Short1999.md", "# too short");
        write(dir, "readme.txt", &padded("not markdown"));

        let notes = load_notes(dir, &NotesConfig::default(), &NoteParser::default()).unwrap();
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Williams (1938)", "Dean (1951)", "A undated", "B undated"]
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut bytes = padded("Fisher (1930)").into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        fs::write(tmp.path().join("Valuation_Fisher1930_TheoryOfInterest.md"), bytes).unwrap();

        let notes =
            load_notes(tmp.path(), &NotesConfig::default(), &NoteParser::default()).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].year, Some(1930));
        assert_eq!(notes[0].author, "Fisher");
    }

    #[test]
    fn missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let notes = load_notes(
            &tmp.path().join("Research Notes"),
            &NotesConfig::default(),
            &NoteParser::default(),
        )
        .unwrap();
        assert!(notes.is_empty());
    }
}
