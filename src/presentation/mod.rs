//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Logging setup and exit status
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::Cli;
pub use factory::create_install_use_case;
