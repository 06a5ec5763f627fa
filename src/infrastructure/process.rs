//! Process execution
//!
//! Implements the CommandRunner port by spawning real child processes.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::entities::Invocation;
use crate::domain::ports::CommandRunner;
use crate::error::{DeployError, DeployResult};

/// Exit code reported when the child was terminated by a signal
const SIGNALLED_EXIT_CODE: i32 = -1;

/// Runs invocations as blocking child processes with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> DeployResult<()> {
        info!("{}", invocation);

        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.arguments())
            .stdin(Stdio::inherit()) // Allow password input
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = invocation.current_dir() {
            debug!("working directory: {}", dir.display());
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| DeployError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;

        if !status.success() {
            return Err(DeployError::Process {
                command: invocation.command_line(),
                exit_code: status.code().unwrap_or(SIGNALLED_EXIT_CODE),
            });
        }

        Ok(())
    }
}
