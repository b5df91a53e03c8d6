//! Account domain — positions, rights, documents, balance history, tokens.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use wire::NetValuePoint;

/// One held position, zipped out of the service's parallel arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub volume: Decimal,
    pub price: Decimal,
}

/// Validation failures when reshaping a position reply.
#[derive(Error, Debug)]
pub enum PositionError {
    #[error(
        "position arrays disagree: {symbols} symbols, {volumes} volumes, {prices} prices"
    )]
    LengthMismatch {
        symbols: usize,
        volumes: usize,
        prices: usize,
    },
}
