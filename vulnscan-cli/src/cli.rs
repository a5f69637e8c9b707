//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Vulnscan -- check a library against known vulnerabilities.
///
/// Use `vulnscan <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "vulnscan", version, about, long_about = None)]
pub struct Cli {
    /// Path to the vulnscan.toml configuration file.
    #[arg(short, long, default_value = "vulnscan.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan one library for known vulnerabilities.
    Scan(ScanArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- scan ----

/// Scan a single library and print the verdict.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Library language (java, javascript, python, go, rust).
    #[arg(short, long)]
    pub language: String,

    /// Library name, matched exactly against the vulnerability database.
    #[arg(short, long)]
    pub name: String,

    /// Override the vulnerability database directory.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Override the minimum severity to report (info, low, medium, high, critical).
    #[arg(long)]
    pub min_severity: Option<String>,
}

// ---- config ----

/// Manage vulnscan configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, lookup, notifier).
        #[arg(long)]
        section: Option<String>,
    },
}
