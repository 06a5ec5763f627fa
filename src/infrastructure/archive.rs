//! Archive builder
//!
//! Packs the deployable parts of a build directory into a bzip2 tarball
//! next to them.

use std::ffi::OsString;

use glob::Pattern;
use tracing::info;

use crate::domain::entities::Invocation;
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::DirectoryContext;
use crate::error::DeployResult;
use crate::infrastructure::fs::matching_entries;

/// Files shipped with every kit, besides the `obj-<arch>` directory
pub const KIT_FILE_PATTERNS: [&str; 9] = [
    "makefile",
    "*.apk",
    "*.sh",
    "*.reference",
    "*.ref",
    "*.master",
    "*.toolreference",
    "*.address",
    "*.record",
];

/// Builds `<dir>.tar.bz2` archives for one target architecture
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    patterns: Vec<Pattern>,
}

impl ArchiveBuilder {
    pub fn new(target_arch: &str) -> DeployResult<Self> {
        let obj_dir = Pattern::escape(&format!("obj-{}", target_arch));
        let patterns = KIT_FILE_PATTERNS
            .iter()
            .copied()
            .chain(std::iter::once(obj_dir.as_str()))
            .map(Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Entries of the directory that go into its archive
    pub fn entries(&self, ctx: &DirectoryContext) -> DeployResult<Vec<OsString>> {
        matching_entries(ctx.dir(), &self.patterns)
    }

    /// The `tar` command that creates the archive, run inside the directory
    pub fn invocation(&self, ctx: &DirectoryContext) -> DeployResult<Invocation> {
        let entries = self.entries(ctx)?;
        info!("archiving {:?}", entries);
        Ok(Invocation::new("tar")
            .args(["-cjvf", ctx.archive_name()])
            .args(entries)
            .in_dir(ctx.dir()))
    }

    /// Create the archive for `ctx`.
    ///
    /// `tar` runs with the directory as its own working directory; ours is
    /// never changed.
    pub fn build<R>(&self, ctx: &DirectoryContext, runner: &R) -> DeployResult<()>
    where
        R: CommandRunner + ?Sized,
    {
        runner.run(&self.invocation(ctx)?)
    }
}
