//! Run-wide deployment configuration read from the environment.

use crate::config::env_validator::EnvVarValidator;
use crate::domain::value_objects::DeviceKind;
use crate::error::{DeployError, DeployResult};

/// Root directory on the device that kits are deployed under
pub const REMOTE_ROOT: &str = "REMOTE_ROOT";
/// Optional prefix for privileged remote commands (e.g. `su -c`)
pub const CMD_PREFIX: &str = "CMD_PREFIX";
/// Device kind tag (`android` or `mic`)
pub const DEVICE_TYPE: &str = "DEVICE_TYPE";
/// ADB serial or SSH host of the device
pub const REMOTE_DEVICE: &str = "REMOTE_DEVICE";
/// Target architecture; selects the `obj-<arch>` build directories
pub const TARGET: &str = "TARGET";

/// Immutable configuration shared by every directory in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub remote_root: String,
    pub cmd_prefix: String,
    pub device_kind: DeviceKind,
    pub device_id: String,
    pub target_arch: String,
}

impl DeployConfig {
    /// Resolve from the process environment
    pub fn from_env() -> DeployResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` to read variables.
    ///
    /// Every missing required variable is reported at once. An empty value
    /// counts as missing. The device kind is validated only after all
    /// required variables are present.
    pub fn from_lookup<F>(lookup: F) -> DeployResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let remote_root = required(REMOTE_ROOT);
        let device_type = required(DEVICE_TYPE);
        let device_id = required(REMOTE_DEVICE);
        let target_arch = required(TARGET);

        if !missing.is_empty() {
            return Err(DeployError::MissingConfiguration { names: missing });
        }

        let device_kind = parse_device_kind(&device_type)?;
        let cmd_prefix = lookup(CMD_PREFIX).unwrap_or_default();

        Ok(Self {
            remote_root,
            cmd_prefix,
            device_kind,
            device_id,
            target_arch,
        })
    }

    /// Name of the build output directory that marks a deployable directory
    pub fn obj_dir_name(&self) -> String {
        format!("obj-{}", self.target_arch)
    }
}

fn parse_device_kind(tag: &str) -> DeployResult<DeviceKind> {
    DeviceKind::parse(tag).ok_or_else(|| {
        let tags = DeviceKind::tags();
        let validator = EnvVarValidator::new(DEVICE_TYPE, &tags);
        DeployError::UnsupportedDevice {
            kind: tag.to_string(),
            suggestion: validator.suggest(tag),
        }
    })
}
