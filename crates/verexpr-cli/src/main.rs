//! Command line front end for version-range expressions.
//!
//! Loads a catalog of known versions and resolves expressions against it,
//! printing decisions, list edits, or per-unit explanations.

mod catalog_file;
mod cli;
mod config;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::cli::{Cli, build_config, run};
use crate::config::CliConfig;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "command failed");
            ExitCode::FAILURE
        }
    }
}
