//! File System Access
//!
//! Directory walking and pattern expansion over the local build tree.

mod local;

pub use local::{deployable_dirs, matching_entries};
