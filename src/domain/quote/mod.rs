//! Quote domain — spot quotes, candle history, per-symbol aggregates.

pub mod client;
pub mod wire;

use rust_decimal::Decimal;

pub use wire::{Candle, Quote, QuotePeriod};

/// Best-effort aggregate of a symbol's current and historical quotes.
///
/// Produced by [`client::Quotes::symbol_data`]. Either half may be missing
/// when the underlying call failed, so a zero `current_price` or an empty
/// candle list means "unavailable", not a confirmed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolData {
    pub symbol: String,
    /// Latest traded price; `Decimal::ZERO` when the quote call failed.
    pub current_price: Decimal,
    /// Candles covering the requested window; empty when the history call
    /// failed.
    pub candles: Vec<Candle>,
}
