//! Wire types for order tickets and order/deal replies.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body for `POST /order`.
///
/// Every field travels as a JSON string, the numeric ones included — the
/// service's ticket parser is string-typed across the board. Replies use
/// a plain number for the same `type` discriminant; see [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTicket {
    #[serde(rename = "sym")]
    pub symbol: String,
    #[serde(rename = "vol")]
    pub volume: Decimal,
    #[serde(rename = "pri")]
    pub price: Decimal,
    /// Callback URL notified on fills; empty for none.
    pub callback: String,
    /// Service-defined order type discriminant.
    #[serde(rename = "type", with = "serde_util::stringified")]
    pub order_type: i32,
    /// Free-form label echoed back in order and deal rows.
    pub tag: String,
}

/// Remote order id handed back by `POST /order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    #[serde(rename = "roid")]
    pub order_id: String,
}

/// An order row as the service reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "sym")]
    pub symbol: String,
    #[serde(rename = "vol")]
    pub volume: Decimal,
    #[serde(rename = "pri")]
    pub price: Decimal,
    #[serde(rename = "date")]
    pub datetime: String,
    #[serde(rename = "type")]
    pub order_type: i32,
    pub tag: String,
    #[serde(rename = "oid")]
    pub order_id: String,
}

/// A filled deal with its settlement-currency amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    #[serde(rename = "sym")]
    pub symbol: String,
    #[serde(rename = "vol")]
    pub volume: Decimal,
    #[serde(rename = "pri")]
    pub price: Decimal,
    #[serde(rename = "date")]
    pub datetime: String,
    pub tag: String,
    #[serde(rename = "oid")]
    pub order_id: String,
    pub usd: Decimal,
    pub ntd: Decimal,
}

/// Reply wrapper for order listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersReply {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Reply wrapper for deal listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealsReply {
    #[serde(default)]
    pub deals: Vec<Deal>,
}
