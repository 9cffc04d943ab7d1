//! Quote board: the caller-supplied snapshot of current quotes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::MarketQuote;

/// A snapshot of current quotes, keyed by symbol.
///
/// The board is owned and refreshed by the caller: the core never fetches
/// market data itself. Inserting a quote for a symbol already on the board
/// replaces the previous snapshot wholesale - quotes are values, not
/// mutable records.
///
/// # Example
///
/// ```rust
/// use folio_core::{MarketQuote, QuoteBoard};
/// use rust_decimal_macros::dec;
///
/// let board: QuoteBoard = [
///     MarketQuote::new("AAPL", dec!(150)),
///     MarketQuote::new("GOOG", dec!(2800)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(board.get("AAPL").unwrap().price, dec!(150));
/// assert!(board.get("MSFT").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteBoard {
    quotes: HashMap<String, MarketQuote>,
}

impl QuoteBoard {
    /// Creates an empty quote board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a quote, replacing any previous snapshot for its symbol.
    ///
    /// Returns the replaced quote, if any.
    pub fn insert(&mut self, quote: MarketQuote) -> Option<MarketQuote> {
        self.quotes.insert(quote.symbol.clone(), quote)
    }

    /// Returns the current quote for a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&MarketQuote> {
        self.quotes.get(symbol)
    }

    /// Returns true if the board carries a quote for `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(symbol)
    }

    /// Returns the number of quoted instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no instruments are quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterates over all quotes on the board.
    pub fn iter(&self) -> impl Iterator<Item = &MarketQuote> {
        self.quotes.values()
    }

    /// Returns all quoted symbols, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.quotes.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl FromIterator<MarketQuote> for QuoteBoard {
    fn from_iter<I: IntoIterator<Item = MarketQuote>>(iter: I) -> Self {
        let mut board = Self::new();
        for quote in iter {
            board.insert(quote);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_board() -> QuoteBoard {
        [
            MarketQuote::new("AAPL", dec!(150)).with_dividend_rate(dec!(0.006)),
            MarketQuote::new("GOOG", dec!(2800)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_and_contains() {
        let board = sample_board();
        assert_eq!(board.len(), 2);
        assert!(board.contains("AAPL"));
        assert!(!board.contains("MSFT"));
        assert_eq!(board.get("GOOG").unwrap().price, dec!(2800));
    }

    #[test]
    fn test_insert_replaces_snapshot() {
        let mut board = sample_board();

        let old = board.insert(MarketQuote::new("AAPL", dec!(155)).with_dividend_rate(dec!(0.006)));
        assert_eq!(old.unwrap().price, dec!(150));
        assert_eq!(board.get("AAPL").unwrap().price, dec!(155));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_symbols_sorted() {
        let board = sample_board();
        assert_eq!(board.symbols(), vec!["AAPL", "GOOG"]);
    }

    #[test]
    fn test_empty() {
        let board = QuoteBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.symbols(), Vec::<&str>::new());
    }
}
