//! Quotes sub-client — spot quotes, candle history, symbol aggregates.

use crate::client::IitraderClient;
use crate::domain::quote::wire::{Quote, QuotePeriod};
use crate::domain::quote::SymbolData;
use crate::error::SdkError;

use chrono::Utc;
use rust_decimal::Decimal;

pub struct Quotes<'a> {
    pub(crate) client: &'a IitraderClient,
}

impl<'a> Quotes<'a> {
    /// Latest quote for `symbol`, or the quote as of `at` (unix seconds)
    /// when given.
    pub async fn get(&self, symbol: &str, at: Option<i64>) -> Result<Quote, SdkError> {
        Ok(self.client.http.get_quote(symbol, at).await?)
    }

    /// Candles for `symbol` between `start` and `end`, inclusive unix
    /// seconds.
    pub async fn period(
        &self,
        symbol: &str,
        start: i64,
        end: i64,
    ) -> Result<QuotePeriod, SdkError> {
        Ok(self.client.http.get_quote_period(symbol, start, end).await?)
    }

    /// Best-effort aggregate of the latest quote and the candle history in
    /// `[start, end]`. `end == 0` means "now". A failed sub-call leaves its
    /// half of the aggregate at the zero value instead of erroring.
    pub async fn symbol_data(&self, symbol: &str, start: i64, end: i64) -> SymbolData {
        let end = if end == 0 { Utc::now().timestamp() } else { end };

        let current_price = match self.get(symbol, None).await {
            Ok(quote) => quote.price,
            Err(e) => {
                tracing::debug!(symbol, error = %e, "Quote unavailable for symbol aggregate");
                Decimal::ZERO
            }
        };

        let candles = match self.period(symbol, start, end).await {
            Ok(period) => period.candles,
            Err(e) => {
                tracing::debug!(symbol, error = %e, "History unavailable for symbol aggregate");
                Vec::new()
            }
        };

        SymbolData {
            symbol: symbol.to_string(),
            current_price,
            candles,
        }
    }
}
