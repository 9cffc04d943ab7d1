//! Holdings valuation against a quote snapshot.

use folio_core::{Portfolio, QuoteBoard};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market value of a single position at the current quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionValue {
    /// Ticker symbol.
    pub symbol: String,

    /// Held quantity.
    pub quantity: u64,

    /// Price per share used for the valuation.
    pub price: Decimal,

    /// Market value (`price × quantity`).
    pub market_value: Decimal,
}

/// Returns the total market value of all held positions.
///
/// Sums `price × qty` over every held symbol quoted on the board. Held
/// symbols missing from the board are skipped silently. An empty
/// portfolio values to zero against any board.
#[must_use]
pub fn total_value(portfolio: &Portfolio, quotes: &QuoteBoard) -> Decimal {
    portfolio
        .iter_positions()
        .filter_map(|(symbol, qty)| {
            quotes
                .get(symbol)
                .map(|quote| quote.price * Decimal::from(qty))
        })
        .sum()
}

/// Returns the per-position market value breakdown, sorted by symbol.
///
/// Held symbols missing from the board are excluded, consistently with
/// [`total_value`]: the breakdown always sums to the total.
#[must_use]
pub fn position_values(portfolio: &Portfolio, quotes: &QuoteBoard) -> Vec<PositionValue> {
    let mut values: Vec<PositionValue> = portfolio
        .iter_positions()
        .filter_map(|(symbol, qty)| {
            quotes.get(symbol).map(|quote| PositionValue {
                symbol: symbol.to_owned(),
                quantity: qty,
                price: quote.price,
                market_value: quote.price * Decimal::from(qty),
            })
        })
        .collect();

    values.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    values
}

/// Returns the dividend income a sweep would collect, without collecting it.
///
/// [`Portfolio::collect_dividends`] credits exactly this amount for the
/// same portfolio and board.
#[must_use]
pub fn projected_dividends(portfolio: &Portfolio, quotes: &QuoteBoard) -> Decimal {
    portfolio
        .iter_positions()
        .filter_map(|(symbol, qty)| quotes.get(symbol).map(|quote| quote.dividend_for(qty)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{MarketQuote, ShareClass};
    use rust_decimal_macros::dec;

    fn sample_board() -> QuoteBoard {
        [
            MarketQuote::new("AAPL", dec!(150)).with_dividend_rate(dec!(0.006)),
            MarketQuote::new("GOOG", dec!(2800)),
            MarketQuote::new("PREF", dec!(100))
                .with_dividend_rate(dec!(0.05))
                .with_share_class(ShareClass::Preferred),
        ]
        .into_iter()
        .collect()
    }

    fn sample_portfolio(board: &QuoteBoard) -> Portfolio {
        let mut portfolio = Portfolio::new(dec!(50_000));
        portfolio.buy(board.get("AAPL").unwrap(), 20).unwrap();
        portfolio.buy(board.get("GOOG").unwrap(), 10).unwrap();
        portfolio.buy(board.get("PREF").unwrap(), 100).unwrap();
        portfolio
    }

    #[test]
    fn test_total_value() {
        let board = sample_board();
        let portfolio = sample_portfolio(&board);

        // 20 × 150 + 10 × 2,800 + 100 × 100 = 41,000
        assert_eq!(total_value(&portfolio, &board), dec!(41_000));
    }

    #[test]
    fn test_total_value_empty_portfolio_is_zero() {
        let portfolio = Portfolio::new(dec!(10_000));
        assert_eq!(total_value(&portfolio, &sample_board()), Decimal::ZERO);
        assert_eq!(total_value(&portfolio, &QuoteBoard::new()), Decimal::ZERO);
    }

    #[test]
    fn test_total_value_skips_unquoted_symbols() {
        let board = sample_board();
        let mut portfolio = sample_portfolio(&board);
        portfolio
            .buy(&MarketQuote::new("MYST", dec!(10)), 50)
            .unwrap();

        // MYST is not on the board, so the total is unchanged.
        assert_eq!(total_value(&portfolio, &board), dec!(41_000));
    }

    #[test]
    fn test_position_values_sum_to_total() {
        let board = sample_board();
        let portfolio = sample_portfolio(&board);

        let breakdown = position_values(&portfolio, &board);
        assert_eq!(breakdown.len(), 3);

        let sum: Decimal = breakdown.iter().map(|p| p.market_value).sum();
        assert_eq!(sum, total_value(&portfolio, &board));
    }

    #[test]
    fn test_position_values_sorted_by_symbol() {
        let board = sample_board();
        let portfolio = sample_portfolio(&board);

        let breakdown = position_values(&portfolio, &board);
        let symbols: Vec<&str> = breakdown.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOG", "PREF"]);
    }

    #[test]
    fn test_projected_dividends_matches_collection() {
        let board = sample_board();
        let mut portfolio = sample_portfolio(&board);

        // AAPL: 20 × 150 × 0.006 = 18; PREF: 100 × 100 × 0.05 = 500
        let projected = projected_dividends(&portfolio, &board);
        assert_eq!(projected, dec!(518));

        let collected = portfolio.collect_dividends(&board);
        assert_eq!(collected, projected);
    }

    #[test]
    fn test_projected_dividends_pure() {
        let board = sample_board();
        let portfolio = sample_portfolio(&board);
        let cash_before = portfolio.cash();

        let _ = projected_dividends(&portfolio, &board);
        assert_eq!(portfolio.cash(), cash_before);
    }
}
