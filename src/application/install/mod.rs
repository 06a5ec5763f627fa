//! Install Module
//!
//! Walks a build tree and deploys (or cleans) every directory that carries
//! an `obj-<arch>` build output.
//!
//! ## Structure
//!
//! - `options` - `RunMode`
//! - `result` - `RunSummary`
//! - `use_case` - `InstallUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use kitdeploy::application::install::{InstallUseCase, RunMode};
//!
//! let use_case = InstallUseCase::new(config, SystemRunner::new())?;
//! let summary = use_case.execute(&root, RunMode::Deploy)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::RunMode;
pub use result::RunSummary;
pub use use_case::{InstallUseCase, PACKAGE_PATTERN};
