//! Wire types for watchlist tickets and replies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body for `POST /watch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchTicket {
    #[serde(rename = "sym")]
    pub symbol: String,
}

/// One tracked symbol with its latest price and change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchEntry {
    #[serde(rename = "sym")]
    pub symbol: String,
    #[serde(rename = "pri")]
    pub price: Decimal,
    pub change: Decimal,
}

/// Reply payload for `/watch_list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchListReply {
    #[serde(default)]
    pub watches: Vec<WatchEntry>,
}
