//! Wire types for strategy rankings and subscriptions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body for `POST /sub`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTicket {
    pub hash: String,
}

/// A ranked strategy row. Subscription listings reuse the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rank {
    /// Identifying hash, also the subscription key.
    pub hash: String,
    #[serde(rename = "perf")]
    pub performance: Decimal,
    pub name: String,
    pub tag: String,
    #[serde(rename = "cnt")]
    pub count: i64,
    pub expire: String,
}

/// Reply payload for `/rank` and `/ranks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RanksReply {
    #[serde(rename = "rank", default)]
    pub ranks: Vec<Rank>,
}

/// Reply payload for `/sub_list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubListReply {
    #[serde(rename = "sub", default)]
    pub subscriptions: Vec<Rank>,
}

/// Reply payload for `/alltags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTagsReply {
    #[serde(default)]
    pub tags: Vec<String>,
}
