//! Device profiles - how each logical device operation is spelled for a
//! given transport.
//!
//! Android devices are driven through `adb`; `mic` devices through
//! `ssh`/`scp`. Both profiles share the remote shell scripts for mkdir,
//! rmdir and extract and differ only in how a script reaches the device
//! and how files are pushed.

use std::path::Path;

use super::invocation::{shell_quote, Invocation};
use crate::config::DeployConfig;
use crate::domain::value_objects::{DeviceKind, DirectoryContext};
use crate::error::{DeployError, DeployResult};

/// A logical operation against the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand<'a> {
    /// Run an arbitrary script in the device shell
    Shell(&'a str),
    /// Create the directory's remote path
    Mkdir,
    /// Remove the directory's remote path
    Rmdir,
    /// Unpack the pushed archive in the remote path, then delete it
    Extract,
    /// Copy the local archive to the remote path
    Push,
    /// Install (replacing) a package file from the local directory
    InstallPackage(&'a Path),
}

impl DeviceCommand<'_> {
    /// Operation name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            DeviceCommand::Shell(_) => "shell",
            DeviceCommand::Mkdir => "mkdir",
            DeviceCommand::Rmdir => "rmdir",
            DeviceCommand::Extract => "extract",
            DeviceCommand::Push => "push",
            DeviceCommand::InstallPackage(_) => "install-package",
        }
    }
}

/// Command set for one device, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    kind: DeviceKind,
    device_id: String,
    cmd_prefix: String,
}

impl DeviceProfile {
    /// Select the profile for the configured device kind
    pub fn resolve(config: &DeployConfig) -> Self {
        Self {
            kind: config.device_kind,
            device_id: config.device_id.clone(),
            cmd_prefix: config.cmd_prefix.clone(),
        }
    }

    /// Whether `command` has a rendering for this device
    pub fn supports(&self, command: &DeviceCommand<'_>) -> bool {
        match (self.kind, command) {
            (DeviceKind::Android, _) => true,
            (DeviceKind::Mic, DeviceCommand::Rmdir | DeviceCommand::InstallPackage(_)) => false,
            (DeviceKind::Mic, _) => true,
        }
    }

    /// Whether bundled application packages get installed after extraction
    pub fn installs_packages(&self) -> bool {
        self.supports(&DeviceCommand::InstallPackage(Path::new("")))
    }

    /// Render `command` for the directory described by `ctx`.
    ///
    /// Fails with `UnsupportedOperation` when the device kind has no such
    /// command (rmdir and package installs on `mic`).
    pub fn render(
        &self,
        command: &DeviceCommand<'_>,
        ctx: &DirectoryContext,
    ) -> DeployResult<Invocation> {
        if !self.supports(command) {
            return Err(DeployError::UnsupportedOperation {
                device: self.kind.as_str(),
                operation: command.name(),
            });
        }

        let remote = shell_quote(ctx.remote_path());
        let archive = shell_quote(ctx.archive_name());

        let invocation = match command {
            DeviceCommand::Shell(script) => self.shell(script),
            DeviceCommand::Mkdir => self.shell(&format!("mkdir -p {}", remote)),
            DeviceCommand::Rmdir => self.shell(&self.prefixed(&format!("rm -rf {}", remote))),
            DeviceCommand::Extract => self.shell(&format!(
                "cd {}; {}; rm {}",
                remote,
                self.prefixed(&format!("tar -xjvf {}", archive)),
                archive
            )),
            DeviceCommand::Push => self.push(ctx).in_dir(ctx.dir()),
            DeviceCommand::InstallPackage(package) => Invocation::new("adb")
                .args(["-s", self.device_id.as_str(), "install", "-r"])
                .arg(package)
                .in_dir(ctx.dir()),
        };

        Ok(invocation)
    }

    /// Wrap a script so it runs in the device shell
    fn shell(&self, script: &str) -> Invocation {
        match self.kind {
            DeviceKind::Android => {
                Invocation::new("adb").args(["-s", self.device_id.as_str(), "shell", script])
            }
            DeviceKind::Mic => Invocation::new("ssh").args([self.device_id.as_str(), script]),
        }
    }

    fn push(&self, ctx: &DirectoryContext) -> Invocation {
        match self.kind {
            DeviceKind::Android => Invocation::new("adb").args([
                "-s",
                self.device_id.as_str(),
                "push",
                ctx.archive_name(),
                ctx.remote_path(),
            ]),
            DeviceKind::Mic => Invocation::new("scp")
                .arg(ctx.archive_name())
                .arg(format!("{}:{}", self.device_id, shell_quote(ctx.remote_path()))),
        }
    }

    fn prefixed(&self, command: &str) -> String {
        if self.cmd_prefix.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", self.cmd_prefix, command)
        }
    }
}
