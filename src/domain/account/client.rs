//! Account sub-client — positions, rights, document id, balances, token.

use crate::client::IitraderClient;
use crate::domain::account::wire::NetValuePoint;
use crate::domain::account::Position;
use crate::error::SdkError;

pub struct Account<'a> {
    pub(crate) client: &'a IitraderClient,
}

impl<'a> Account<'a> {
    /// Held positions, one row per symbol.
    pub async fn position(&self) -> Result<Vec<Position>, SdkError> {
        let book = self.client.http.get_position_book().await?;
        book.into_positions()
            .map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// The account's trading-rights descriptor.
    pub async fn right(&self) -> Result<String, SdkError> {
        Ok(self.client.http.get_right().await?.right)
    }

    /// Identifier of the account's signed document.
    pub async fn doc_id(&self) -> Result<String, SdkError> {
        Ok(self.client.http.get_doc_id().await?.doc_id)
    }

    /// Account balance history as a time series.
    pub async fn net_value(&self) -> Result<Vec<NetValuePoint>, SdkError> {
        Ok(self.client.http.get_net_value().await?.net_values)
    }

    /// The REST token currently bound to the account.
    pub async fn api_token(&self) -> Result<String, SdkError> {
        Ok(self.client.http.get_api_token().await?.token)
    }
}
