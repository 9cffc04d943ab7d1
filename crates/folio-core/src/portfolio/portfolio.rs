//! Portfolio struct and core operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{FolioError, FolioResult};
use crate::types::{MarketQuote, QuoteBoard};

/// A stock portfolio: a cash balance plus held positions.
///
/// Positions are tracked by symbol only; the current quote for a symbol is
/// supplied by the caller at the time of each trade or dividend sweep, never
/// stored. All mutation goes through the operations below, and a failing
/// operation never applies partially.
///
/// # Example
///
/// ```rust
/// use folio_core::{MarketQuote, Portfolio};
/// use rust_decimal_macros::dec;
///
/// let aapl = MarketQuote::new("AAPL", dec!(150));
/// let mut portfolio = Portfolio::new(dec!(20_000));
///
/// portfolio.buy(&aapl, 10)?;
/// assert_eq!(portfolio.cash(), dec!(18_500));
/// assert_eq!(portfolio.position("AAPL"), 10);
///
/// portfolio.sell(&aapl, 10)?;
/// assert_eq!(portfolio.cash(), dec!(20_000));
/// # Ok::<(), folio_core::FolioError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Cash available for purchases. A buy can never drive this negative.
    cash_balance: Decimal,

    /// Held quantity per symbol. A position sold down to zero is removed,
    /// so the map never carries explicit zero entries.
    holdings: HashMap<String, u64>,
}

impl Portfolio {
    /// Creates a portfolio with an initial cash balance and no positions.
    #[must_use]
    pub fn new(initial_cash: Decimal) -> Self {
        Self {
            cash_balance: initial_cash,
            holdings: HashMap::new(),
        }
    }

    /// Buys `qty` shares at the quoted price.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidQuote` if the quote fails validation,
    /// `FolioError::InvalidAmount` if `qty` is zero, or
    /// `FolioError::InsufficientFunds` if the cost exceeds the cash
    /// balance. The portfolio is unchanged on error.
    pub fn buy(&mut self, quote: &MarketQuote, qty: u64) -> FolioResult<()> {
        quote.validate()?;
        if qty == 0 {
            return Err(FolioError::invalid_amount(Decimal::ZERO, "buy quantity"));
        }

        let cost = quote.price * Decimal::from(qty);
        if self.cash_balance < cost {
            return Err(FolioError::insufficient_funds(
                &quote.symbol,
                cost,
                self.cash_balance,
                qty,
            ));
        }

        self.cash_balance -= cost;
        *self.holdings.entry(quote.symbol.clone()).or_insert(0) += qty;

        tracing::debug!(symbol = %quote.symbol, qty, %cost, "buy filled");
        Ok(())
    }

    /// Sells `qty` shares at the quoted price.
    ///
    /// A position sold down to zero is removed from the holdings map.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidQuote` if the quote fails validation,
    /// `FolioError::InvalidAmount` if `qty` is zero, or
    /// `FolioError::InsufficientHoldings` if `qty` exceeds the held
    /// quantity. The portfolio is unchanged on error.
    pub fn sell(&mut self, quote: &MarketQuote, qty: u64) -> FolioResult<()> {
        quote.validate()?;
        if qty == 0 {
            return Err(FolioError::invalid_amount(Decimal::ZERO, "sell quantity"));
        }

        let held = self.position(&quote.symbol);
        if qty > held {
            return Err(FolioError::insufficient_holdings(&quote.symbol, qty, held));
        }

        let remaining = held - qty;
        if remaining == 0 {
            self.holdings.remove(&quote.symbol);
        } else {
            self.holdings.insert(quote.symbol.clone(), remaining);
        }

        let proceeds = quote.price * Decimal::from(qty);
        self.cash_balance += proceeds;

        tracing::debug!(symbol = %quote.symbol, qty, %proceeds, "sell filled");
        Ok(())
    }

    /// Deposits cash into the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidAmount` if `amount` is not positive.
    pub fn deposit(&mut self, amount: Decimal) -> FolioResult<()> {
        if amount <= Decimal::ZERO {
            return Err(FolioError::invalid_amount(amount, "deposit"));
        }

        self.cash_balance += amount;

        tracing::debug!(%amount, "cash deposited");
        Ok(())
    }

    /// Collects dividends across all held positions.
    ///
    /// For every held symbol quoted on the board with a positive dividend
    /// rate, accrues `qty × price × dividend_rate`. The total is credited
    /// to the cash balance and returned. Held symbols absent from the
    /// board, or with a zero rate, contribute nothing - a defined business
    /// rule, not a fault.
    pub fn collect_dividends(&mut self, quotes: &QuoteBoard) -> Decimal {
        let total: Decimal = self
            .holdings
            .iter()
            .filter_map(|(symbol, &qty)| quotes.get(symbol).map(|quote| quote.dividend_for(qty)))
            .sum();

        self.cash_balance += total;

        tracing::debug!(%total, "dividends collected");
        total
    }

    /// Returns an owned snapshot of current positions.
    ///
    /// Mutating the returned map has no effect on the portfolio.
    #[must_use]
    pub fn positions(&self) -> HashMap<String, u64> {
        self.holdings.clone()
    }

    /// Iterates over held positions without copying.
    pub fn iter_positions(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.holdings.iter().map(|(symbol, &qty)| (symbol.as_str(), qty))
    }

    /// Returns the held quantity for a symbol (zero if not held).
    #[must_use]
    pub fn position(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Returns the current cash balance.
    #[must_use]
    pub fn cash(&self) -> Decimal {
        self.cash_balance
    }

    /// Returns the number of distinct held symbols.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
