//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - deploy or clean every kit directory in a build tree

pub mod install;

pub use install::{InstallUseCase, RunMode, RunSummary};
