//! Error types for kitdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kitdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy and clean runs
#[derive(Error, Debug)]
pub enum DeployError {
    /// One or more required environment variables are unset or empty
    #[error("required environment variables are not set: {}", .names.join(", "))]
    MissingConfiguration { names: Vec<&'static str> },

    /// The device profile has no command for the requested operation
    #[error("device kind '{device}' does not support the '{operation}' operation")]
    UnsupportedOperation {
        device: &'static str,
        operation: &'static str,
    },

    /// `DEVICE_TYPE` names a device kind we have no profile for
    #[error("unexpected device type '{kind}'{suggestion}")]
    UnsupportedDevice { kind: String, suggestion: String },

    /// A spawned command exited unsuccessfully
    #[error("command failed with exit code {exit_code}: {command}")]
    Process { command: String, exit_code: i32 },

    /// A command could not be started at all
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A step failed while processing one deployable directory
    #[error("could not install in directory {}: {source}", .dir.display())]
    Directory {
        dir: PathBuf,
        #[source]
        source: Box<DeployError>,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file pattern could not be compiled
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Short category name used in diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Directory { source, .. } => source.category(),
            Self::MissingConfiguration { .. } | Self::UnsupportedOperation { .. } => {
                "configuration"
            }
            Self::UnsupportedDevice { .. } => "unsupported-device",
            Self::Process { .. } | Self::Spawn { .. } => "process",
            Self::Walk { .. } | Self::Pattern(_) | Self::Io(_) => "io",
        }
    }

    /// Exit code of the failing command, if this error came from one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Process { exit_code, .. } => Some(*exit_code),
            Self::Directory { source, .. } => source.exit_code(),
            _ => None,
        }
    }

    /// The innermost error, looking through directory context
    pub fn root_cause(&self) -> &DeployError {
        match self {
            Self::Directory { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
