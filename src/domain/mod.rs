//! Domain Layer
//!
//! Device profiles, rendered commands and per-directory values. Nothing in
//! here spawns processes or touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - `DeviceProfile`, `Invocation`
//! - `value_objects/` - `DeviceKind`, `DirectoryContext`
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
