//! Watchlist sub-client — track and untrack symbols.

use crate::client::IitraderClient;
use crate::domain::watchlist::wire::WatchEntry;
use crate::error::SdkError;

pub struct Watchlist<'a> {
    pub(crate) client: &'a IitraderClient,
}

impl<'a> Watchlist<'a> {
    /// Start tracking `symbol`.
    pub async fn add(&self, symbol: &str) -> Result<(), SdkError> {
        Ok(self.client.http.add_watch(symbol).await?)
    }

    /// Stop tracking `symbol`.
    pub async fn remove(&self, symbol: &str) -> Result<(), SdkError> {
        Ok(self.client.http.remove_watch(symbol).await?)
    }

    /// Every tracked symbol with its latest price and change.
    pub async fn list(&self) -> Result<Vec<WatchEntry>, SdkError> {
        Ok(self.client.http.get_watch_list().await?.watches)
    }
}
