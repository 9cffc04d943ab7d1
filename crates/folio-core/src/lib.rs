//! # Folio Core
//!
//! Core types and bookkeeping for the Folio stock portfolio library.
//!
//! This crate provides the stateful half of Folio:
//!
//! - **Types**: [`MarketQuote`], [`ShareClass`], and the [`QuoteBoard`]
//!   snapshot supplied by the caller on every valuation or trade
//! - **Bookkeeping**: [`Portfolio`] with buy/sell/deposit/dividend
//!   operations, and [`SharedPortfolio`] for embedding behind a GUI or
//!   server where mutations must be serialized
//! - **Errors**: the [`FolioError`] taxonomy shared across the workspace
//!
//! ## Design Philosophy
//!
//! - **Caller-supplied data**: the core never fetches quotes; a fresh
//!   [`QuoteBoard`] accompanies every call that needs prices
//! - **No partial application**: every failing operation leaves the
//!   portfolio exactly as it was
//! - **Explicit over implicit**: dividend eligibility is a rate on the
//!   quote, preferred status is a share class - no runtime type inspection
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let aapl = MarketQuote::new("AAPL", dec!(150)).with_dividend_rate(dec!(0.006));
//! let board: QuoteBoard = [aapl.clone()].into_iter().collect();
//!
//! let mut portfolio = Portfolio::new(dec!(20_000));
//! portfolio.buy(&aapl, 10)?;
//! assert_eq!(portfolio.cash(), dec!(18_500));
//!
//! let collected = portfolio.collect_dividends(&board);
//! assert_eq!(collected, dec!(9)); // 10 × 150 × 0.006
//! # Ok::<(), folio_core::FolioError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{FolioError, FolioResult};

// Re-export main types
pub use types::{MarketQuote, QuoteBoard, ShareClass};

// Re-export portfolio types
pub use portfolio::{Portfolio, SharedPortfolio};

/// Prelude module for convenient imports.
///
/// ```rust
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FolioError, FolioResult};
    pub use crate::portfolio::{Portfolio, SharedPortfolio};
    pub use crate::types::{MarketQuote, QuoteBoard, ShareClass};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
