//! CommandRunner port - executes rendered invocations
//!
//! Implementations:
//! - `SystemRunner` - spawns real child processes
//! - recording runners in tests

use crate::domain::entities::Invocation;
use crate::error::DeployResult;

/// Runs one external command to completion
pub trait CommandRunner {
    /// Run `invocation`, blocking until it exits.
    ///
    /// Exit status zero is `Ok(())`; anything else is
    /// `DeployError::Process` carrying the command line and exit code.
    fn run(&self, invocation: &Invocation) -> DeployResult<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> DeployResult<()> {
        (**self).run(invocation)
    }
}
