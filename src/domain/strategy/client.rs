//! Strategies sub-client — rankings and subscriptions.

use crate::client::IitraderClient;
use crate::domain::strategy::wire::Rank;
use crate::error::SdkError;

pub struct Strategies<'a> {
    pub(crate) client: &'a IitraderClient,
}

impl<'a> Strategies<'a> {
    /// Ranked strategies from `/rank`.
    pub async fn rank(&self) -> Result<Vec<Rank>, SdkError> {
        Ok(self.client.http.get_rank().await?.ranks)
    }

    /// Ranked strategies from `/ranks`, the extended listing.
    pub async fn ranks(&self) -> Result<Vec<Rank>, SdkError> {
        Ok(self.client.http.get_ranks().await?.ranks)
    }

    /// Subscribe to the strategy identified by `hash`.
    pub async fn subscribe(&self, hash: &str) -> Result<(), SdkError> {
        Ok(self.client.http.subscribe(hash).await?)
    }

    /// Strategies the account is subscribed to.
    pub async fn subscriptions(&self) -> Result<Vec<Rank>, SdkError> {
        Ok(self.client.http.get_sub_list().await?.subscriptions)
    }

    /// Every tag the service knows about.
    pub async fn all_tags(&self) -> Result<Vec<String>, SdkError> {
        Ok(self.client.http.get_all_tags().await?.tags)
    }
}
