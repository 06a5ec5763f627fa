//! Domain Entities
//!
//! - `DeviceProfile` - per-device command set
//! - `Invocation` - a rendered external command

mod device_profile;
mod invocation;

pub use device_profile::{DeviceCommand, DeviceProfile};
pub use invocation::{shell_quote, Invocation};
