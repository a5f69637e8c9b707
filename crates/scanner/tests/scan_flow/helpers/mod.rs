//! Shared scan flow test helpers.
//!
//! Provides the `TestContext` factory used at the start of every scenario,
//! recording mock collaborators, and small asserter types.

pub mod asserters;
pub mod context;
pub mod mocks;
