//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Everything else a run
//! needs comes from the environment (see `crate::config`).

use clap::Parser;

use crate::application::RunMode;

/// kitdeploy - deploy test kits onto Android and SSH devices
#[derive(Parser, Debug)]
#[command(name = "kitdeploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Configuration is read from REMOTE_ROOT, DEVICE_TYPE, REMOTE_DEVICE, TARGET and CMD_PREFIX."
)]
pub struct Cli {
    /// Remove previously deployed directories from the device instead of deploying
    #[arg(short, long)]
    pub clean: bool,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        RunMode::from_clean_flag(self.clean)
    }
}
