//! Preferred-share concentration reporting.

use folio_core::{MarketQuote, Portfolio, QuoteBoard};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::valuation::total_value;

/// Result of a concentration calculation.
///
/// `NotApplicable` replaces a division by zero when the portfolio has no
/// cash and no quoted holdings; callers never see a NaN or a fabricated
/// zero percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concentration {
    /// Concentration as a percentage of total portfolio value, in [0, 100].
    Percentage(Decimal),
    /// Total portfolio value is zero; no ratio exists.
    NotApplicable,
}

impl Concentration {
    /// Returns the percentage, or `None` when not applicable.
    #[must_use]
    pub fn as_percentage(&self) -> Option<Decimal> {
        match self {
            Self::Percentage(pct) => Some(*pct),
            Self::NotApplicable => None,
        }
    }

    /// Returns true if a ratio could be computed.
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(pct) => write!(f, "{}%", pct.normalize()),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Returns the share of total portfolio value held in preferred instruments.
///
/// `is_preferred` is a capability predicate over the quote, so callers
/// classify instruments however they like. The denominator is the quoted
/// holdings value plus cash; held symbols missing from the board are
/// excluded from numerator and denominator alike, consistently with
/// [`total_value`].
///
/// # Example
///
/// ```rust
/// use folio_analytics::{preferred_concentration, Concentration};
/// use folio_core::prelude::*;
///
/// let pref = MarketQuote::new("PREF", dec!(100)).with_share_class(ShareClass::Preferred);
/// let board: QuoteBoard = [pref.clone()].into_iter().collect();
///
/// let mut portfolio = Portfolio::new(dec!(20_000));
/// portfolio.buy(&pref, 100)?;
///
/// // 10,000 preferred / (10,000 holdings + 10,000 cash) = 50%
/// let result = preferred_concentration(&portfolio, &board, MarketQuote::is_preferred);
/// assert_eq!(result, Concentration::Percentage(dec!(50)));
/// # Ok::<(), folio_core::FolioError>(())
/// ```
#[must_use]
pub fn preferred_concentration<F>(
    portfolio: &Portfolio,
    quotes: &QuoteBoard,
    is_preferred: F,
) -> Concentration
where
    F: Fn(&MarketQuote) -> bool,
{
    let total = total_value(portfolio, quotes) + portfolio.cash();
    if total == Decimal::ZERO {
        return Concentration::NotApplicable;
    }

    let preferred_value: Decimal = portfolio
        .iter_positions()
        .filter_map(|(symbol, qty)| {
            quotes
                .get(symbol)
                .filter(|quote| is_preferred(quote))
                .map(|quote| quote.price * Decimal::from(qty))
        })
        .sum();

    Concentration::Percentage(preferred_value / total * Decimal::ONE_HUNDRED)
}

/// Returns the preferred concentration using the quote's own share class.
///
/// Convenience wrapper over [`preferred_concentration`] with
/// [`MarketQuote::is_preferred`] as the predicate.
#[must_use]
pub fn share_class_concentration(portfolio: &Portfolio, quotes: &QuoteBoard) -> Concentration {
    preferred_concentration(portfolio, quotes, MarketQuote::is_preferred)
}
