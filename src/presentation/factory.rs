//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::InstallUseCase;
use crate::config::DeployConfig;
use crate::error::DeployResult;
use crate::infrastructure::SystemRunner;

/// Type alias for the concrete InstallUseCase with all dependencies
pub type ConcreteInstallUseCase = InstallUseCase<SystemRunner>;

/// Create an install use case that runs real `tar`/`adb`/`ssh`/`scp`
pub fn create_install_use_case(config: DeployConfig) -> DeployResult<ConcreteInstallUseCase> {
    InstallUseCase::new(config, SystemRunner::new())
}
