//! Test environment builder for isolated kitdeploy runs.
//!
//! Provides `TestEnv` - a temporary build tree used as the working
//! directory, plus helpers to run the CLI with a controlled environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Every variable kitdeploy reads; cleared before each run
pub const DEPLOY_VARS: [&str; 5] = [
    "REMOTE_ROOT",
    "CMD_PREFIX",
    "DEVICE_TYPE",
    "REMOTE_DEVICE",
    "TARGET",
];

/// Result of running a kitdeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated build tree that kitdeploy runs from
pub struct TestEnv {
    pub root: TempDir,
    /// Extra directories put in front of `PATH`
    path_prefix: Vec<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            path_prefix: Vec::new(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_kitdeploy")),
        }
    }

    /// Resolve a path inside the build tree
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Create a kit directory with an `obj-<arch>` build output and files
    pub fn with_kit(self, name: &str, arch: &str, files: &[&str]) -> Self {
        let dir = self.path(name);
        std::fs::create_dir_all(dir.join(format!("obj-{}", arch)))
            .expect("Failed to create kit directory");
        for file in files {
            std::fs::write(dir.join(file), "").expect("Failed to write kit file");
        }
        self
    }

    /// Put `dir` in front of `PATH` for every run
    pub fn with_path_prefix(mut self, dir: &Path) -> Self {
        self.path_prefix.push(dir.to_path_buf());
        self
    }

    /// Run kitdeploy from the build tree root with only `vars` configured
    pub fn run(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path()).args(args);

        for var in DEPLOY_VARS {
            cmd.env_remove(var);
        }
        cmd.env("RUST_LOG", "info");

        if !self.path_prefix.is_empty() {
            let original = std::env::var_os("PATH").unwrap_or_default();
            let paths = self
                .path_prefix
                .iter()
                .cloned()
                .chain(std::env::split_paths(&original));
            cmd.env(
                "PATH",
                std::env::join_paths(paths).expect("Failed to build PATH"),
            );
        }

        for (key, value) in vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute kitdeploy");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Environment for an Android device run
pub fn android_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("REMOTE_ROOT", "/data/kit"),
        ("DEVICE_TYPE", "android"),
        ("REMOTE_DEVICE", "ABC123"),
        ("TARGET", "ia32"),
    ]
}
