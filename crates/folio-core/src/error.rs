//! Error types for the Folio library.
//!
//! This module defines the error types used throughout Folio,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// The main error type for Folio operations.
///
/// All variants describe caller errors: they are synchronous, local, and
/// non-retryable. No operation that returns an error mutates state first.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// Buy cost exceeds the available cash balance.
    #[error("Insufficient funds: ${available} available, ${required} required to buy {quantity} {symbol}")]
    InsufficientFunds {
        /// Symbol of the instrument being bought.
        symbol: String,
        /// Total cost of the attempted purchase.
        required: Decimal,
        /// Cash balance at the time of the attempt.
        available: Decimal,
        /// Number of shares requested.
        quantity: u64,
    },

    /// Sell quantity exceeds the held quantity.
    #[error("Insufficient holdings of {symbol}: {held} held, {requested} requested")]
    InsufficientHoldings {
        /// Symbol of the instrument being sold.
        symbol: String,
        /// Number of shares requested.
        requested: u64,
        /// Number of shares actually held.
        held: u64,
    },

    /// Non-positive deposit amount or zero trade quantity.
    #[error("Invalid amount for {operation}: {value} (must be positive)")]
    InvalidAmount {
        /// The invalid value.
        value: Decimal,
        /// The operation that rejected it.
        operation: String,
    },

    /// Quote failed validation (negative price or dividend rate).
    #[error("Invalid quote for {symbol}: {reason}")]
    InvalidQuote {
        /// Symbol of the offending quote.
        symbol: String,
        /// Reason the quote is invalid.
        reason: String,
    },
}

impl FolioError {
    /// Create an insufficient funds error.
    #[must_use]
    pub fn insufficient_funds(
        symbol: impl Into<String>,
        required: Decimal,
        available: Decimal,
        quantity: u64,
    ) -> Self {
        Self::InsufficientFunds {
            symbol: symbol.into(),
            required,
            available,
            quantity,
        }
    }

    /// Create an insufficient holdings error.
    #[must_use]
    pub fn insufficient_holdings(symbol: impl Into<String>, requested: u64, held: u64) -> Self {
        Self::InsufficientHoldings {
            symbol: symbol.into(),
            requested,
            held,
        }
    }

    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, operation: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            operation: operation.into(),
        }
    }

    /// Create an invalid quote error.
    #[must_use]
    pub fn invalid_quote(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
