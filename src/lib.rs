//! kitdeploy - deploy built test kits onto a remote test device
//!
//! Every directory in a build tree that carries an `obj-<arch>` build output
//! is archived, pushed to the device (over `adb` for Android, `scp`/`ssh`
//! for everything else), extracted there and, on Android, has its bundled
//! packages installed. Clean mode removes the deployed copies again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{InstallUseCase, RunMode, RunSummary};
pub use config::DeployConfig;
pub use domain::entities::{DeviceCommand, DeviceProfile, Invocation};
pub use domain::ports::CommandRunner;
pub use domain::value_objects::{DeviceKind, DirectoryContext};
pub use error::{DeployError, DeployResult};
