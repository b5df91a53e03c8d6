//! High-level client — `IitraderClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::account::client::Account;
use crate::domain::order::client::Orders;
use crate::domain::quote::client::Quotes;
use crate::domain::strategy::client::Strategies;
use crate::domain::watchlist::client::Watchlist;
use crate::error::SdkError;
use crate::http::IitraderHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::strategy::client::Strategies as StrategiesClient;
pub use crate::domain::watchlist::client::Watchlist as WatchlistClient;

/// The primary entry point for the iitrader SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.quotes()`, `client.orders()`, etc.
#[derive(Clone, Debug)]
pub struct IitraderClient {
    pub(crate) http: IitraderHttp,
}

impl IitraderClient {
    pub fn builder() -> IitraderClientBuilder {
        IitraderClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn watchlist(&self) -> Watchlist<'_> {
        Watchlist { client: self }
    }

    pub fn strategies(&self) -> Strategies<'_> {
        Strategies { client: self }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct IitraderClientBuilder {
    base_url: String,
    token: Option<String>,
}

impl Default for IitraderClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl IitraderClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Account token attached to every request. Required.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Build the client. Fails when no token was provided — the service
    /// rejects anonymous calls, so the builder does too rather than on
    /// first use. Must be called inside a Tokio runtime.
    pub fn build(self) -> Result<IitraderClient, SdkError> {
        let token = self.token.unwrap_or_default();
        Ok(IitraderClient {
            http: IitraderHttp::new(&self.base_url, &token)?,
        })
    }
}
