//! CLI-specific error types and exit code mapping

use vulnscan_core::error::{ScanError, VulnscanError};
use vulnscan_scanner::ScannerError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed (bad argument, unknown section).
    #[error("{0}")]
    Command(String),

    /// The scan completed and the library has known vulnerabilities.
    #[error("{0} has known vulnerabilities")]
    Risky(String),

    /// The lookup or notification collaborator failed.
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from vulnscan-core.
    #[error("{0}")]
    Core(#[from] VulnscanError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                 |
    /// |------|-----------------------------------------|
    /// | 0    | Success (Safe verdict)                  |
    /// | 1    | General / command error                 |
    /// | 2    | Configuration error                     |
    /// | 4    | Risky verdict                           |
    /// | 5    | Lookup or notification failure          |
    /// | 10   | IO error                                |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Risky(_) => 4,
            Self::Scan(_) => 5,
            Self::Io(_) => 10,
            Self::Core(core) => match core {
                VulnscanError::Config(_) => 2,
                VulnscanError::Scan(_) => 5,
                VulnscanError::Io(_) => 10,
                VulnscanError::Request(_) => 1,
            },
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<ScannerError> for CliError {
    fn from(e: ScannerError) -> Self {
        Self::Core(e.into())
    }
}
