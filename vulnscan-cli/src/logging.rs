//! Logging initialization for the vulnscan CLI.
//!
//! Configures `tracing-subscriber` from the `[general]` section of
//! `VulnscanConfig`. Log lines go to stderr so that stdout carries only
//! command output.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use vulnscan_core::config::GeneralConfig;

/// Install the global subscriber for the CLI process.
///
/// `RUST_LOG`, when set, replaces `config.log_level`. `log_format` selects
/// JSON lines (`"json"`) or the multi-line human format (`"pretty"`).
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let initialized = match config.log_format.as_str() {
        "json" => registry.with(layer.json()).try_init(),
        "pretty" => registry.with(layer.pretty()).try_init(),
        other => {
            anyhow::bail!("unknown log format '{other}', expected 'json' or 'pretty'");
        }
    };

    initialized.map_err(|e| {
        anyhow::anyhow!(
            "failed to initialize {} tracing subscriber: {}",
            config.log_format,
            e
        )
    })
}
