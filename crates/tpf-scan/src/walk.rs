//! PDF corpus discovery.
//!
//! Walks one or more corpus directories under the literature root and yields
//! every `*.pdf` file (case-insensitive extension). Directories whose name
//! matches an excluded name (`bin` by default, compared case-insensitively)
//! are pruned together with everything below them. Hidden files and
//! `.gitignore` rules are not honored: the corpus is a plain folder tree.
//! Entries the walker cannot read are logged and skipped.

use globset::{GlobBuilder, GlobMatcher};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ScanError;

/// One PDF found in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    pub full_path: PathBuf,
    /// Path relative to the literature root, always with forward slashes.
    pub rel_path: String,
    pub filename: String,
}

fn pdf_matcher() -> Result<GlobMatcher, ScanError> {
    Ok(GlobBuilder::new("*.pdf")
        .case_insensitive(true)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// `path` relative to `root`, joined with `/` regardless of platform.
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect the PDFs below each directory in `dirs`, in walk order per directory,
/// sorted by relative path within each directory.
///
/// Relative paths are computed against `root`.
///
/// # Errors
///
/// [`ScanError::MissingRoot`] if `root` or the first directory (the primary
/// corpus) does not exist. Later directories are optional and skipped when absent.
pub fn collect_documents(
    root: &Path,
    dirs: &[PathBuf],
    excluded_dir_names: &[String],
) -> Result<Vec<CorpusDocument>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let matcher = pdf_matcher()?;
    let excluded: Vec<String> = excluded_dir_names
        .iter()
        .map(|name| name.to_lowercase())
        .collect();

    let mut documents = Vec::new();
    for (index, dir) in dirs.iter().enumerate() {
        if !dir.is_dir() {
            if index == 0 {
                return Err(ScanError::MissingRoot(dir.clone()));
            }
            debug!(dir = %dir.display(), "optional corpus directory missing, skipping");
            continue;
        }

        let mut found = walk_dir(root, dir, &matcher, &excluded);
        found.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        debug!(dir = %dir.display(), count = found.len(), "collected corpus documents");
        documents.extend(found);
    }
    Ok(documents)
}

fn readable(entry: Result<DirEntry, ignore::Error>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(error = %e, "skipping unreadable corpus entry");
            None
        }
    }
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    matcher: &GlobMatcher,
    excluded: &[String],
) -> Vec<CorpusDocument> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false);
    builder.hidden(false);

    let excluded = excluded.to_vec();
    builder.filter_entry(move |entry| {
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) || entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        !excluded.contains(&name)
    });

    let mut found = Vec::new();
    for entry in builder.build().filter_map(readable) {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(name) = entry.path().file_name() else {
            continue;
        };
        if !matcher.is_match(name) {
            continue;
        }
        found.push(CorpusDocument {
            full_path: entry.path().to_path_buf(),
            rel_path: relative_display(root, entry.path()),
            filename: name.to_string_lossy().into_owned(),
        });
    }
    found
}
