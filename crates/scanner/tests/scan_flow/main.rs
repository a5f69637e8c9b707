//! Scan flow integration tests for vulnscan-scanner.
//!
//! These tests drive the `Scanner` through recording mock collaborators and
//! check the verdict, the notification side effect, and failure propagation.
//!
//! # Test Structure
//!
//! - `helpers/` -- Test context factory, mock collaborators, asserters
//! - `scenarios/` -- Test files organized by scenario
//!
//! # Running
//!
//! ```bash
//! cargo test -p vulnscan-scanner --test scan_flow
//! ```

mod helpers;
mod scenarios;
