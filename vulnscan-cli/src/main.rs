//! Vulnscan CLI entry point
//!
//! Parses arguments, initializes logging from the `[general]` section
//! (with `--log-level` taking precedence), dispatches to a command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use vulnscan_core::config::{GeneralConfig, VulnscanConfig};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config errors are reported by the command itself
    let mut general = VulnscanConfig::load_or_default(&cli.config)
        .await
        .map(|config| config.general)
        .unwrap_or_else(|_| GeneralConfig::default());
    if let Some(level) = &cli.log_level {
        general.log_level = level.clone();
    }
    if let Err(e) = logging::init_tracing(&general) {
        eprintln!("{} {:#}", "warning:".yellow().bold(), e);
    }
    vulnscan_core::metrics::describe_all();

    let writer = OutputWriter::new(cli.output);
    let result: Result<(), CliError> = match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &cli.config, &writer).await,
        Commands::Config(args) => commands::config::execute(args, &cli.config, &writer).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
