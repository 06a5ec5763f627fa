//! Common test utilities for kitdeploy integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated build tree plus helpers to run the CLI
//! - Fake `adb`/`ssh`/`scp`/`tar` executables that log their arguments

#![allow(dead_code)]

pub mod env;
#[cfg(unix)]
pub mod fake_tools;

pub use env::*;
#[cfg(unix)]
pub use fake_tools::*;
