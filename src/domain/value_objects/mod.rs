//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod device_kind;
mod directory_context;

pub use device_kind::DeviceKind;
pub use directory_context::{DirectoryContext, ARCHIVE_SUFFIX};
