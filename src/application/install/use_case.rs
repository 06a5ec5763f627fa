//! Install Use Case
//!
//! Per-directory pipelines:
//!
//! - clean: `Rmdir`
//! - deploy: `Archive -> Mkdir -> Push -> Extract -> InstallPackage*`
//!
//! Each step runs only if the previous one succeeded, and the first failure
//! ends the whole run.

use std::cell::Cell;
use std::path::Path;

use glob::Pattern;
use tracing::{info, warn};

use crate::config::DeployConfig;
use crate::domain::entities::{DeviceCommand, DeviceProfile, Invocation};
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::DirectoryContext;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::{deployable_dirs, matching_entries, ArchiveBuilder};

use super::options::RunMode;
use super::result::RunSummary;

/// Packages installed on Android devices after extraction
pub const PACKAGE_PATTERN: &str = "*.apk";

/// Deploys or cleans every kit directory under a root
pub struct InstallUseCase<R>
where
    R: CommandRunner,
{
    config: DeployConfig,
    profile: DeviceProfile,
    archiver: ArchiveBuilder,
    packages: Pattern,
    runner: R,
}

impl<R> InstallUseCase<R>
where
    R: CommandRunner,
{
    /// Create a new install use case
    pub fn new(config: DeployConfig, runner: R) -> DeployResult<Self> {
        let profile = DeviceProfile::resolve(&config);
        let archiver = ArchiveBuilder::new(&config.target_arch)?;
        Ok(Self {
            config,
            profile,
            archiver,
            packages: Pattern::new(PACKAGE_PATTERN)?,
            runner,
        })
    }

    /// Walk `root` and run `mode` on every deployable directory.
    ///
    /// Stops at the first failing directory; the error names it.
    pub fn execute(&self, root: &Path, mode: RunMode) -> DeployResult<RunSummary> {
        let runner = CountingRunner::new(&self.runner);
        let mut summary = RunSummary::new();

        for dir in deployable_dirs(root, self.config.obj_dir_name()) {
            let dir = dir?;
            info!("in dir {}", dir.display());

            let outcome = self.context_for(&dir).and_then(|ctx| match mode {
                RunMode::Clean => self.clean(&ctx, &runner),
                RunMode::Deploy => self.deploy(&ctx, &runner),
            });

            if let Err(err) = outcome {
                warn!(
                    "Could not install in directory {}. Error code = {}. cmd = {}",
                    dir.display(),
                    err.exit_code()
                        .map_or_else(|| err.category().to_string(), |code| code.to_string()),
                    failing_command(&err)
                );
                return Err(DeployError::Directory {
                    dir,
                    source: Box::new(err),
                });
            }

            summary.directories.push(dir);
        }

        summary.commands = runner.count();
        info!("done: {}", summary);
        Ok(summary)
    }

    fn context_for(&self, dir: &Path) -> DeployResult<DirectoryContext> {
        DirectoryContext::new(dir, &self.config.remote_root).ok_or_else(|| {
            DeployError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot name an archive after {}", dir.display()),
            ))
        })
    }

    fn clean(&self, ctx: &DirectoryContext, runner: &impl CommandRunner) -> DeployResult<()> {
        self.device(DeviceCommand::Rmdir, ctx, runner)
    }

    fn deploy(&self, ctx: &DirectoryContext, runner: &impl CommandRunner) -> DeployResult<()> {
        self.archiver.build(ctx, runner)?;
        self.device(DeviceCommand::Mkdir, ctx, runner)?;
        self.device(DeviceCommand::Push, ctx, runner)?;
        self.device(DeviceCommand::Extract, ctx, runner)?;

        if self.profile.installs_packages() {
            let packages = matching_entries(ctx.dir(), std::slice::from_ref(&self.packages))?;
            for package in &packages {
                self.device(DeviceCommand::InstallPackage(Path::new(package)), ctx, runner)?;
            }
        }

        Ok(())
    }

    fn device(
        &self,
        command: DeviceCommand<'_>,
        ctx: &DirectoryContext,
        runner: &impl CommandRunner,
    ) -> DeployResult<()> {
        let invocation = self.profile.render(&command, ctx)?;
        runner.run(&invocation)
    }
}

/// Command line of the failing step, when the error came from a command
fn failing_command(err: &DeployError) -> String {
    match err.root_cause() {
        DeployError::Process { command, .. } => command.clone(),
        DeployError::Spawn { program, .. } => program.clone(),
        other => other.to_string(),
    }
}

/// Counts the commands a run issues
struct CountingRunner<'a, R: ?Sized> {
    inner: &'a R,
    issued: Cell<usize>,
}

impl<'a, R: CommandRunner + ?Sized> CountingRunner<'a, R> {
    fn new(inner: &'a R) -> Self {
        Self {
            inner,
            issued: Cell::new(0),
        }
    }

    fn count(&self) -> usize {
        self.issued.get()
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for CountingRunner<'_, R> {
    fn run(&self, invocation: &Invocation) -> DeployResult<()> {
        self.issued.set(self.issued.get() + 1);
        self.inner.run(invocation)
    }
}
