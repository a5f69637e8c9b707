#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Construction error types (`ScannerError`)
//! - [`config`]: Scanner configuration (`ScannerConfig`, builder, `NotifierKind`)
//! - [`event`]: Notification events (`NotificationEvent`)
//! - [`verdict`]: Verdict derivation (`VerdictEngine`)
//! - [`lookup`]: Local vulnerability database (`VulnDb`, `DbLookup`)
//! - [`notifier`]: Notifier implementations (`LogNotifier`, `ChannelNotifier`)
//! - [`scanner`]: Main orchestrator (`Scanner`)
//!
//! # Architecture
//!
//! ```text
//! Request --> DbLookup (VulnDb index) --> Vec<VulnerabilityId>
//!                                               |
//!                          +--------------------+
//!                          | non-empty          |
//!                          v                    |
//!                 Notifier (log | mpsc)         |
//!                          |                    |
//!                          +--------+-----------+
//!                                   v
//!                             VerdictEngine --> Response
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod lookup;
pub mod notifier;
pub mod scanner;
pub mod verdict;

// --- Public API Re-exports ---

// Scanner (main orchestrator)
pub use scanner::Scanner;

// Verdict
pub use verdict::{RISKY_REASON, SAFE_REASON, VerdictEngine};

// Configuration
pub use config::{NotifierKind, ScannerConfig, ScannerConfigBuilder};

// Error
pub use error::ScannerError;

// Events
pub use event::NotificationEvent;

// Lookup
pub use lookup::{DbLookup, VulnDb, VulnDbEntry};

// Notifiers
pub use notifier::{ChannelNotifier, LogNotifier};
