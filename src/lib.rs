//! # iitrader SDK
//!
//! A Rust client for the iitrader remote trading service: quotes, orders,
//! positions, watchlists, and strategy subscriptions over authenticated
//! HTTP.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Wire/domain types, serde helpers, error types
//! 2. **Transport** — DNS-caching connection layer with warm keep-alive pooling
//! 3. **HTTP API** — `IitraderHttp` with one method per endpoint and per-request retry policies
//! 4. **High-Level Client** — `IitraderClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iitrader_sdk::prelude::*;
//!
//! let client = IitraderClient::builder()
//!     .token("account-token")
//!     .build()?;
//!
//! let quote = client.quotes().get("2454.TW", None).await?;
//! let positions = client.account().position().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared serde helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: Transport + Layer 3: HTTP API ───────────────────────────────────

/// HTTP client with DNS-caching transport and retry policies.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `IitraderClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — quotes
    pub use crate::domain::quote::{Candle, Quote, QuotePeriod, SymbolData};

    // Domain types — orders
    pub use crate::domain::order::{Deal, Order, OrderReceipt, OrderTicket};

    // Domain types — account
    pub use crate::domain::account::{NetValuePoint, Position};

    // Domain types — watchlist, strategy
    pub use crate::domain::strategy::Rank;
    pub use crate::domain::watchlist::WatchEntry;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        AccountClient, IitraderClient, IitraderClientBuilder, OrdersClient, QuotesClient,
        StrategiesClient, WatchlistClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
