//! Scan flow scenarios.

mod channel_flow;
mod failure;
mod idempotence;
mod notification;
mod verdict;
