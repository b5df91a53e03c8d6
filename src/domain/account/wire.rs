//! Wire types for account replies.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reply payload for `/position` — three parallel arrays where index `i`
/// across all three describes one held position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionBook {
    #[serde(rename = "sym", default)]
    pub symbols: Vec<String>,
    #[serde(rename = "vol", default)]
    pub volumes: Vec<Decimal>,
    #[serde(rename = "pri", default)]
    pub prices: Vec<Decimal>,
}

/// Reply payload for `/right`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RightReply {
    pub right: String,
}

/// Reply payload for `/doc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocIdReply {
    #[serde(rename = "doc")]
    pub doc_id: String,
}

/// One point in the account balance series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetValuePoint {
    /// Unix seconds, string-encoded on the wire.
    #[serde(rename = "ts", with = "serde_util::stringified")]
    pub timestamp: i64,
    pub balance: Decimal,
}

/// Reply payload for `/netvalue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetValueReply {
    #[serde(rename = "netvalue", default)]
    pub net_values: Vec<NetValuePoint>,
}

/// Reply payload for `/apitoken`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiTokenReply {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_value_decode() {
        let reply: NetValueReply = serde_json::from_str(
            r#"{
                "ret": "OK",
                "netvalue": [
                    {"ts": "1699833600", "balance": "1000000"},
                    {"ts": "1699920000", "balance": "1002500.75"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(reply.net_values.len(), 2);
        assert_eq!(reply.net_values[0].timestamp, 1_699_833_600);
        assert_eq!(reply.net_values[1].balance, Decimal::new(100_250_075, 2));
    }

    #[test]
    fn test_position_book_decode() {
        let book: PositionBook = serde_json::from_str(
            r#"{
                "ret": "OK",
                "sym": ["2454.TW", "2330.TW"],
                "vol": ["1000", "2000"],
                "pri": ["1185.5", "580"]
            }"#,
        )
        .unwrap();
        assert_eq!(book.symbols, vec!["2454.TW", "2330.TW"]);
        assert_eq!(book.volumes[1], Decimal::new(2000, 0));
        assert_eq!(book.prices[1], Decimal::new(580, 0));
    }
}
