//! Shared portfolio handle for multi-caller contexts.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::FolioResult;
use crate::types::{MarketQuote, QuoteBoard};

use super::Portfolio;

/// A clonable handle to a [`Portfolio`] behind a mutex.
///
/// A GUI or server exposing one portfolio to multiple callers must
/// serialize mutating calls so each read-modify-write is observed
/// atomically. Every method here takes the lock for the duration of one
/// operation; clones share the same underlying portfolio.
///
/// # Example
///
/// ```rust
/// use folio_core::{MarketQuote, Portfolio, SharedPortfolio};
/// use rust_decimal_macros::dec;
///
/// let shared = SharedPortfolio::new(Portfolio::new(dec!(20_000)));
/// let handle = shared.clone();
///
/// handle.buy(&MarketQuote::new("AAPL", dec!(150)), 10)?;
/// assert_eq!(shared.cash(), dec!(18_500));
/// # Ok::<(), folio_core::FolioError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedPortfolio {
    inner: Arc<Mutex<Portfolio>>,
}

impl SharedPortfolio {
    /// Wraps a portfolio in a shared handle.
    #[must_use]
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            inner: Arc::new(Mutex::new(portfolio)),
        }
    }

    /// Buys `qty` shares at the quoted price.
    ///
    /// # Errors
    ///
    /// See [`Portfolio::buy`].
    pub fn buy(&self, quote: &MarketQuote, qty: u64) -> FolioResult<()> {
        self.inner.lock().buy(quote, qty)
    }

    /// Sells `qty` shares at the quoted price.
    ///
    /// # Errors
    ///
    /// See [`Portfolio::sell`].
    pub fn sell(&self, quote: &MarketQuote, qty: u64) -> FolioResult<()> {
        self.inner.lock().sell(quote, qty)
    }

    /// Deposits cash into the portfolio.
    ///
    /// # Errors
    ///
    /// See [`Portfolio::deposit`].
    pub fn deposit(&self, amount: Decimal) -> FolioResult<()> {
        self.inner.lock().deposit(amount)
    }

    /// Collects dividends across all held positions.
    pub fn collect_dividends(&self, quotes: &QuoteBoard) -> Decimal {
        self.inner.lock().collect_dividends(quotes)
    }

    /// Returns an owned snapshot of current positions.
    #[must_use]
    pub fn positions(&self) -> HashMap<String, u64> {
        self.inner.lock().positions()
    }

    /// Returns the held quantity for a symbol (zero if not held).
    #[must_use]
    pub fn position(&self, symbol: &str) -> u64 {
        self.inner.lock().position(symbol)
    }

    /// Returns the current cash balance.
    #[must_use]
    pub fn cash(&self) -> Decimal {
        self.inner.lock().cash()
    }

    /// Returns a deep copy of the portfolio for lock-free reads.
    #[must_use]
    pub fn snapshot(&self) -> Portfolio {
        self.inner.lock().clone()
    }
}
