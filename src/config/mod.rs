//! Configuration for kitdeploy runs
//!
//! All configuration comes from the process environment:
//!
//! | Variable        | Required | Meaning                                  |
//! |-----------------|----------|------------------------------------------|
//! | `REMOTE_ROOT`   | yes      | deploy root on the device                |
//! | `DEVICE_TYPE`   | yes      | `android` (adb) or `mic` (ssh)           |
//! | `REMOTE_DEVICE` | yes      | adb serial or ssh host                   |
//! | `TARGET`        | yes      | architecture, selects `obj-<arch>` dirs  |
//! | `CMD_PREFIX`    | no       | prefix for privileged remote commands    |

mod env;
pub mod env_validator;

pub use env::{DeployConfig, CMD_PREFIX, DEVICE_TYPE, REMOTE_DEVICE, REMOTE_ROOT, TARGET};
pub use env_validator::{levenshtein, EnvVarValidator};
