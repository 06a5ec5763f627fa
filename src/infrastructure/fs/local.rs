//! Local build tree access
//!
//! Finds deployable directories and expands file patterns against a
//! directory's contents.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::{DeployError, DeployResult};

/// `*` does not match a leading dot, same as shell globbing
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Depth-first, pre-order walk of `root` yielding every directory that
/// directly contains a subdirectory named `marker`.
///
/// Siblings are visited in file-name order. The walk keeps descending into
/// matched directories. Symlinks are not followed.
pub fn deployable_dirs(
    root: &Path,
    marker: impl Into<String>,
) -> impl Iterator<Item = DeployResult<PathBuf>> {
    let marker = marker.into();
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() && entry.path().join(&marker).is_dir() => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(source) => Some(Err(DeployError::Walk {
                path: source.path().map(Path::to_path_buf).unwrap_or_default(),
                source,
            })),
        })
}

/// Names of the entries in `dir` matching `patterns`.
///
/// Results are grouped by pattern in the order given, each group sorted by
/// name. Patterns that match nothing contribute nothing. Names are returned
/// exactly as stored on disk; non-UTF-8 names are matched lossily.
pub fn matching_entries(dir: &Path, patterns: &[Pattern]) -> DeployResult<Vec<OsString>> {
    let mut names = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<Vec<_>, _>>()?;
    names.sort();

    Ok(patterns
        .iter()
        .flat_map(|pattern| {
            names
                .iter()
                .filter(move |name| pattern.matches_with(&name.to_string_lossy(), MATCH_OPTIONS))
                .cloned()
        })
        .collect())
}
