//! Writing the datasets into the build directory.
//!
//! The build directory may live in a synced folder where the sync client
//! holds locks on some files. Cleaning removes the directory's contents but
//! never the directory itself, and any file that cannot be removed or
//! overwritten for lack of permission is skipped.

use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ReconcileError;
use crate::pipeline::ReconcileOutput;

/// Directory under the build root that holds the JSON datasets.
pub const DATA_DIR: &str = "static/js";
pub const TIMELINE_FILE: &str = "timeline_data.json";
pub const LIBRARY_FILE: &str = "library.json";
pub const CLASSIFICATION_FILE: &str = "classification.json";

fn io_error(path: &Path, source: io::Error) -> ReconcileError {
    ReconcileError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `Ok(true)` on success, `Ok(false)` when `path` is locked.
fn skip_if_locked(result: io::Result<()>, path: &Path) -> Result<bool, ReconcileError> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %path.display(), "locked, left in place");
            Ok(false)
        }
        Err(e) => Err(io_error(path, e)),
    }
}

/// Remove everything inside `dir`, skipping entries that are locked.
///
/// Returns the number of entries that could not be removed.
///
/// # Errors
///
/// Returns an error for failures other than permission denials.
pub fn clean_dir(dir: &Path) -> Result<usize, ReconcileError> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut locked = 0;
    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if !skip_if_locked(result, &path)? {
            locked += 1;
        }
    }
    Ok(locked)
}

/// Serialize `value` as pretty JSON into `path`.
///
/// Returns `false` when the destination is locked and was left untouched.
///
/// # Errors
///
/// Returns an error for serialization failures and non-permission IO errors.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<bool, ReconcileError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    skip_if_locked(fs::write(path, json), path)
}

/// Files written by [`write_datasets`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WrittenFiles {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write timeline, library and classification datasets under `build_dir`.
///
/// # Errors
///
/// Returns an error if the build directory cannot be prepared or a dataset
/// cannot be written for a reason other than a lock.
pub fn write_datasets(
    build_dir: &Path,
    output: &ReconcileOutput,
    clean: bool,
) -> Result<WrittenFiles, ReconcileError> {
    if clean {
        let locked = clean_dir(build_dir)?;
        debug!(dir = %build_dir.display(), locked, "build directory cleaned");
    }
    fs::create_dir_all(build_dir).map_err(|e| io_error(build_dir, e))?;

    let data_dir = build_dir.join(DATA_DIR);
    let mut files = WrittenFiles::default();
    let mut record = |path: PathBuf, written: bool| {
        if written {
            files.written.push(path);
        } else {
            files.skipped.push(path);
        }
    };

    let path = data_dir.join(TIMELINE_FILE);
    record(path.clone(), write_json(&path, &output.timeline)?);
    let path = data_dir.join(LIBRARY_FILE);
    record(path.clone(), write_json(&path, &output.library)?);
    let path = data_dir.join(CLASSIFICATION_FILE);
    record(path.clone(), write_json(&path, &output.classifications)?);

    info!(
        dir = %data_dir.display(),
        written = files.written.len(),
        skipped = files.skipped.len(),
        "datasets written"
    );
    Ok(files)
}
