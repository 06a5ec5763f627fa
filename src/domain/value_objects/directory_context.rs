//! Per-directory deployment context.
//!
//! Built fresh for every deployable directory, so nothing from one
//! directory can leak into the commands issued for the next.

use std::path::{Path, PathBuf};

/// Subdirectory (under the remote root) that deployed kits live in
const REMOTE_TOOLS_DIR: &str = "source/tools";

/// Suffix of the archive built for each directory
pub const ARCHIVE_SUFFIX: &str = ".tar.bz2";

/// Everything the commands for one deployable directory need to know
/// beyond the run-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContext {
    /// Local deployable directory
    dir: PathBuf,
    /// Archive file name, relative to `dir`
    archive_name: String,
    /// Destination directory on the device
    remote_path: String,
}

impl DirectoryContext {
    /// Derive the context for `dir` under the device's `remote_root`.
    ///
    /// Returns `None` when `dir` has no final component to name the
    /// archive after (e.g. `/` or `..`).
    pub fn new(dir: &Path, remote_root: &str) -> Option<Self> {
        let basename = dir.file_name()?.to_string_lossy().into_owned();
        let remote_path = format!(
            "{}/{}/{}",
            remote_root.trim_end_matches('/'),
            REMOTE_TOOLS_DIR,
            basename
        );

        Some(Self {
            dir: dir.to_path_buf(),
            archive_name: format!("{}{}", basename, ARCHIVE_SUFFIX),
            remote_path,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_archive_and_remote_path_from_basename() {
        let ctx = DirectoryContext::new(Path::new("/build/tools/toolA"), "/data/kit").unwrap();
        assert_eq!(ctx.archive_name(), "toolA.tar.bz2");
        assert_eq!(ctx.remote_path(), "/data/kit/source/tools/toolA");
        assert_eq!(ctx.dir(), Path::new("/build/tools/toolA"));
    }

    #[test]
    fn trailing_slash_on_remote_root_is_ignored() {
        let ctx = DirectoryContext::new(Path::new("toolB"), "/data/kit/").unwrap();
        assert_eq!(ctx.remote_path(), "/data/kit/source/tools/toolB");
    }

    #[test]
    fn root_directory_has_no_context() {
        assert!(DirectoryContext::new(Path::new("/"), "/data/kit").is_none());
    }
}
