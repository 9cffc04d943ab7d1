//! Portfolio bookkeeping.
//!
//! [`Portfolio`] is the single-owner, single-threaded bookkeeping type;
//! [`SharedPortfolio`] wraps it in a mutex for embedding behind a GUI or
//! server where mutating calls from multiple callers must be serialized.

#[allow(clippy::module_inception)]
mod portfolio;
mod shared;

pub use portfolio::Portfolio;
pub use shared::SharedPortfolio;
