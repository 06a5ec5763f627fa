//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Build tree walking and pattern expansion
//! - `archive` - tarball creation
//! - `process` - child process execution

pub mod archive;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use archive::{ArchiveBuilder, KIT_FILE_PATTERNS};
pub use fs::{deployable_dirs, matching_entries};
pub use process::SystemRunner;
