//! Market quote representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FolioError, FolioResult};

/// Share class of a tradable instrument.
///
/// Replaces subtype-based classification: "preferred" is an attribute of
/// the instrument, tested with [`MarketQuote::is_preferred`] or any
/// caller-supplied predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareClass {
    /// Common stock.
    #[default]
    Common,
    /// Preferred stock.
    Preferred,
}

impl fmt::Display for ShareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Preferred => write!(f, "preferred"),
        }
    }
}

/// A point-in-time snapshot of one tradable instrument.
///
/// A quote is an immutable value: a newer price arrives as a replacement
/// quote on the [`QuoteBoard`](crate::QuoteBoard), never by mutating an
/// existing one. A quote with a zero dividend rate never contributes to
/// dividend totals.
///
/// # Example
///
/// ```rust
/// use folio_core::{MarketQuote, ShareClass};
/// use rust_decimal_macros::dec;
///
/// let pref = MarketQuote::new("PREF", dec!(100))
///     .with_dividend_rate(dec!(0.05))
///     .with_share_class(ShareClass::Preferred);
///
/// assert!(pref.pays_dividend());
/// assert_eq!(pref.dividend_for(100), dec!(500));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Ticker symbol, unique per instrument.
    pub symbol: String,

    /// Current price per share. Must be non-negative.
    pub price: Decimal,

    /// Annualized dividend rate as a fraction of price (0.05 = 5%).
    /// Zero means the instrument does not pay dividends.
    pub dividend_rate: Decimal,

    /// Share class of the instrument.
    pub share_class: ShareClass,
}

impl MarketQuote {
    /// Creates a quote for a common share with no dividend.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            dividend_rate: Decimal::ZERO,
            share_class: ShareClass::Common,
        }
    }

    /// Sets the dividend rate.
    #[must_use]
    pub fn with_dividend_rate(mut self, rate: Decimal) -> Self {
        self.dividend_rate = rate;
        self
    }

    /// Sets the share class.
    #[must_use]
    pub fn with_share_class(mut self, class: ShareClass) -> Self {
        self.share_class = class;
        self
    }

    /// Validates the quote.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidQuote` if the price or dividend rate
    /// is negative.
    pub fn validate(&self) -> FolioResult<()> {
        if self.price < Decimal::ZERO {
            return Err(FolioError::invalid_quote(
                &self.symbol,
                format!("negative price: {}", self.price),
            ));
        }
        if self.dividend_rate < Decimal::ZERO {
            return Err(FolioError::invalid_quote(
                &self.symbol,
                format!("negative dividend rate: {}", self.dividend_rate),
            ));
        }
        Ok(())
    }

    /// Returns true if the instrument pays a dividend.
    #[must_use]
    pub fn pays_dividend(&self) -> bool {
        self.dividend_rate > Decimal::ZERO
    }

    /// Returns the dividend payable on `qty` shares at the current price.
    ///
    /// Zero for non-dividend-paying instruments.
    #[must_use]
    pub fn dividend_for(&self, qty: u64) -> Decimal {
        Decimal::from(qty) * self.price * self.dividend_rate
    }

    /// Returns true if this is a preferred share.
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.share_class == ShareClass::Preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new() {
        let quote = MarketQuote::new("AAPL", dec!(150));
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(150));
        assert_eq!(quote.dividend_rate, Decimal::ZERO);
        assert_eq!(quote.share_class, ShareClass::Common);
        assert!(!quote.pays_dividend());
        assert!(!quote.is_preferred());
    }

    #[test]
    fn test_with_dividend_rate() {
        let quote = MarketQuote::new("AAPL", dec!(150)).with_dividend_rate(dec!(0.006));
        assert!(quote.pays_dividend());

        // 100 × 150 × 0.006 = 90
        assert_eq!(quote.dividend_for(100), dec!(90));
    }

    #[test]
    fn test_zero_rate_pays_nothing() {
        let quote = MarketQuote::new("GOOG", dec!(2800));
        assert_eq!(quote.dividend_for(1_000), Decimal::ZERO);
    }

    #[test]
    fn test_preferred() {
        let quote = MarketQuote::new("PREF", dec!(100))
            .with_dividend_rate(dec!(0.05))
            .with_share_class(ShareClass::Preferred);

        assert!(quote.is_preferred());
        assert_eq!(quote.dividend_for(100), dec!(500));
    }

    #[test]
    fn test_validate() {
        assert!(MarketQuote::new("AAPL", dec!(150)).validate().is_ok());
        assert!(MarketQuote::new("FREE", Decimal::ZERO).validate().is_ok());

        let err = MarketQuote::new("BAD", dec!(-1)).validate().unwrap_err();
        assert!(err.to_string().contains("negative price"));

        let err = MarketQuote::new("BAD", dec!(1))
            .with_dividend_rate(dec!(-0.01))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("negative dividend rate"));
    }

    #[test]
    fn test_share_class_display() {
        assert_eq!(ShareClass::Common.to_string(), "common");
        assert_eq!(ShareClass::Preferred.to_string(), "preferred");
    }

    #[test]
    fn test_serde() {
        let quote = MarketQuote::new("PREF", dec!(100))
            .with_dividend_rate(dec!(0.05))
            .with_share_class(ShareClass::Preferred);

        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"preferred\""));

        let parsed: MarketQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }
}
