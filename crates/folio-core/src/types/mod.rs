//! Domain types for portfolio bookkeeping.
//!
//! This module provides type-safe representations of market data:
//!
//! - [`MarketQuote`]: One instrument's symbol, price, and dividend rate
//! - [`ShareClass`]: Common vs. preferred classification
//! - [`QuoteBoard`]: A caller-supplied snapshot of current quotes

mod board;
mod quote;

pub use board::QuoteBoard;
pub use quote::{MarketQuote, ShareClass};
