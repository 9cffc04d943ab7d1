//! # Folio Analytics
//!
//! Valuation and concentration analytics for Folio portfolios.
//!
//! Everything in this crate is a pure function over a
//! [`Portfolio`](folio_core::Portfolio) and a caller-supplied
//! [`QuoteBoard`](folio_core::QuoteBoard): no state, no I/O, no mutation.
//! Held symbols missing from the board are skipped silently and
//! consistently across every function here - that is the defined
//! business rule, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_analytics::{preferred_concentration, total_value, Concentration};
//! use folio_core::prelude::*;
//!
//! let board: QuoteBoard = [
//!     MarketQuote::new("AAPL", dec!(150)).with_dividend_rate(dec!(0.006)),
//!     MarketQuote::new("PREF", dec!(100))
//!         .with_dividend_rate(dec!(0.05))
//!         .with_share_class(ShareClass::Preferred),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut portfolio = Portfolio::new(dec!(20_000));
//! portfolio.buy(board.get("PREF").unwrap(), 100)?;
//!
//! assert_eq!(total_value(&portfolio, &board), dec!(10_000));
//!
//! let concentration = preferred_concentration(&portfolio, &board, MarketQuote::is_preferred);
//! assert_eq!(concentration, Concentration::Percentage(dec!(50)));
//! # Ok::<(), folio_core::FolioError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod concentration;
pub mod valuation;

// Re-export analytics types and functions
pub use concentration::{preferred_concentration, share_class_concentration, Concentration};
pub use valuation::{position_values, projected_dividends, total_value, PositionValue};

/// Prelude module for convenient imports.
///
/// ```rust
/// use folio_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::concentration::{
        preferred_concentration, share_class_concentration, Concentration,
    };
    pub use crate::valuation::{position_values, projected_dividends, total_value, PositionValue};

    // Re-export commonly used types from folio-core
    pub use folio_core::prelude::*;
}
