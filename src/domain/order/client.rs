//! Orders sub-client — place, cancel, query.

use crate::client::IitraderClient;
use crate::domain::order::wire::{Deal, Order, OrderReceipt, OrderTicket};
use crate::error::SdkError;

pub struct Orders<'a> {
    pub(crate) client: &'a IitraderClient,
}

impl<'a> Orders<'a> {
    /// Place an order; returns the receipt carrying the remote order id.
    pub async fn place(&self, ticket: &OrderTicket) -> Result<OrderReceipt, SdkError> {
        Ok(self.client.http.submit_order(ticket).await?)
    }

    /// Cancel by remote order id. The service treats cancelling an
    /// already-cancelled order as a no-op.
    pub async fn cancel(&self, order_id: &str) -> Result<(), SdkError> {
        Ok(self.client.http.cancel_order(order_id).await?)
    }

    /// Orders still working at the service.
    pub async fn open(&self) -> Result<Vec<Order>, SdkError> {
        Ok(self.client.http.get_open_orders().await?.orders)
    }

    /// Past orders, paged.
    pub async fn history(&self, page: i32) -> Result<Vec<Order>, SdkError> {
        Ok(self.client.http.get_historical_orders(page).await?.orders)
    }

    /// Past deals, paged.
    pub async fn deals(&self, page: i32) -> Result<Vec<Deal>, SdkError> {
        Ok(self.client.http.get_historical_deals(page).await?.deals)
    }
}
