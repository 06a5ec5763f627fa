//! Stand-ins for the external tools kitdeploy drives.
//!
//! Each fake appends `<tool> <args...>` to a log file. The fake `tar`
//! also creates the archive it was asked for, in its working directory.
//! Setting `FAKE_FAIL` makes any call whose logged line contains that
//! text exit with status 7.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FAKE_FAIL_EXIT_CODE: i32 = 7;

const TOOLS: [&str; 4] = ["adb", "ssh", "scp", "tar"];

pub struct FakeTools {
    pub bin_dir: TempDir,
    log: PathBuf,
}

impl FakeTools {
    pub fn install() -> Self {
        let bin_dir = TempDir::new().expect("Failed to create bin dir");
        let log = bin_dir.path().join("calls.log");

        for tool in TOOLS {
            let script = format!(
                r#"#!/bin/sh
line="{tool} $*"
echo "$line" >> "{log}"
if [ "{tool}" = "tar" ] && [ "$1" = "-cjvf" ]; then
    touch "$2"
fi
if [ -n "$FAKE_FAIL" ]; then
    case "$line" in
        *"$FAKE_FAIL"*) exit {code} ;;
    esac
fi
exit 0
"#,
                tool = tool,
                log = log.display(),
                code = FAKE_FAIL_EXIT_CODE,
            );
            let path = bin_dir.path().join(tool);
            std::fs::write(&path, script).expect("Failed to write fake tool");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod fake tool");
        }

        Self { bin_dir, log }
    }

    pub fn dir(&self) -> &Path {
        self.bin_dir.path()
    }

    /// Logged calls, in order; empty if nothing ran
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
