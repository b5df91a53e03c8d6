//! Wire types for quote replies.

use crate::shared::serde_util;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reply payload for `/quote/{symbol}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Price at `timestamp`.
    #[serde(rename = "v")]
    pub price: Decimal,
    /// Quote time, unix seconds (string-encoded on the wire).
    #[serde(rename = "ts", with = "serde_util::stringified")]
    pub timestamp: i64,
}

/// Reply payload for `/quote_period/{symbol}` — the candle series between
/// two inclusive bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotePeriod {
    #[serde(rename = "ts1", with = "serde_util::stringified")]
    pub start_timestamp: i64,
    #[serde(rename = "ts2", with = "serde_util::stringified")]
    pub end_timestamp: i64,
    #[serde(rename = "v", default)]
    pub candles: Vec<Candle>,
}

/// One OHLC candle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    #[serde(rename = "o")]
    pub open: Decimal,
    #[serde(rename = "h")]
    pub high: Decimal,
    #[serde(rename = "l")]
    pub low: Decimal,
    #[serde(rename = "c")]
    pub close: Decimal,
    /// Candle time, unix seconds (string-encoded on the wire).
    #[serde(rename = "ts", with = "serde_util::stringified")]
    pub timestamp: i64,
}

impl Candle {
    /// Candle time as wall-clock UTC, derived from `timestamp`.
    pub fn time(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.timestamp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
