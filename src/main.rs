//! kitdeploy CLI - deploy test kits onto a remote test device
//!
//! Usage: kitdeploy [--clean]
//!
//! Walks the current directory, deploying every directory that holds an
//! `obj-$TARGET` build output. Exits 1 on the first failure.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use kitdeploy::presentation::{create_install_use_case, logging, Cli};
use kitdeploy::{DeployConfig, DeployError};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = DeployConfig::from_env()?;
    info!(
        "device {} ({}), target {}",
        config.device_id, config.device_kind, config.target_arch
    );

    let root = std::env::current_dir().context("cannot determine the working directory")?;
    let marker = config.obj_dir_name();
    let use_case = create_install_use_case(config)?;
    let summary = use_case.execute(&root, cli.mode())?;
    if summary.is_empty() {
        warn!("no directory under {} contains {}", root.display(), marker);
    }
    Ok(())
}

/// Bypasses the log filter: fatal errors always reach stderr
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<DeployError>() {
        Some(deploy_err) => eprintln!("✗ {} error: {}", deploy_err.category(), deploy_err),
        None => eprintln!("✗ Error: {:#}", err),
    }
}
