//! Low-level HTTP client — `IitraderHttp`.
//!
//! One method per API endpoint. Returns wire types (reshaping into domain
//! types happens at the sub-client boundary). Every method funnels through
//! the same request helper: attach the token, send, classify the failure,
//! retry within the policy's attempt count, then decode the reply envelope
//! before the payload.

use crate::domain::account::wire::{
    ApiTokenReply, DocIdReply, NetValueReply, PositionBook, RightReply,
};
use crate::domain::order::wire::{DealsReply, OrderReceipt, OrderTicket, OrdersReply};
use crate::domain::quote::wire::{Quote, QuotePeriod};
use crate::domain::strategy::wire::{AllTagsReply, RanksReply, SubListReply, SubTicket};
use crate::domain::watchlist::wire::{WatchListReply, WatchTicket};
use crate::error::{HttpError, SdkError};
use crate::http::envelope::{Ack, Envelope};
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::http::transport::Transport;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Low-level HTTP client for the iitrader REST API.
#[derive(Clone, Debug)]
pub struct IitraderHttp {
    base_url: String,
    transport: Transport,
    /// Account token sent as the `authorization` header on every request.
    token: String,
}

impl IitraderHttp {
    /// `token` must be non-empty: the service rejects anonymous calls, so
    /// construction fails fast instead of failing on first use.
    ///
    /// Must be called inside a Tokio runtime — the transport spawns its
    /// DNS refresh task on construction.
    pub fn new(base_url: &str, token: &str) -> Result<Self, SdkError> {
        if token.is_empty() {
            return Err(SdkError::Config(
                "cannot construct a client without an API token".to_string(),
            ));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: Transport::new(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    /// Latest quote for `symbol`, or the quote as of `at` (unix seconds)
    /// when given and positive.
    pub async fn get_quote(&self, symbol: &str, at: Option<i64>) -> Result<Quote, HttpError> {
        let mut path = format!("/quote/{}", urlencoding::encode(symbol));
        if let Some(ts) = at.filter(|ts| *ts > 0) {
            path = format!("{}?ts={}", path, ts);
        }
        self.get(&path, RetryPolicy::None).await
    }

    /// Candles for `symbol` between `ts1` and `ts2`, inclusive unix seconds.
    pub async fn get_quote_period(
        &self,
        symbol: &str,
        ts1: i64,
        ts2: i64,
    ) -> Result<QuotePeriod, HttpError> {
        let path = format!(
            "/quote_period/{}?ts1={}&ts2={}",
            urlencoding::encode(symbol),
            ts1,
            ts2
        );
        self.get(&path, RetryPolicy::None).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn submit_order(&self, ticket: &OrderTicket) -> Result<OrderReceipt, HttpError> {
        self.post("/order", ticket, RetryPolicy::None).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<(), HttpError> {
        let path = format!("/cancel?roid={}", urlencoding::encode(order_id));
        let _: Ack = self.delete(&path, RetryPolicy::None).await?;
        Ok(())
    }

    pub async fn get_open_orders(&self) -> Result<OrdersReply, HttpError> {
        self.get("/oorder", RetryPolicy::None).await
    }

    pub async fn get_historical_orders(&self, page: i32) -> Result<OrdersReply, HttpError> {
        let path = format!("/horder?page={}", page);
        self.get(&path, RetryPolicy::None).await
    }

    pub async fn get_historical_deals(&self, page: i32) -> Result<DealsReply, HttpError> {
        let path = format!("/hdeal?page={}", page);
        self.get(&path, RetryPolicy::None).await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn get_position_book(&self) -> Result<PositionBook, HttpError> {
        self.get("/position", RetryPolicy::None).await
    }

    pub async fn get_right(&self) -> Result<RightReply, HttpError> {
        self.get("/right", RetryPolicy::None).await
    }

    pub async fn get_doc_id(&self) -> Result<DocIdReply, HttpError> {
        self.get("/doc", RetryPolicy::None).await
    }

    pub async fn get_net_value(&self) -> Result<NetValueReply, HttpError> {
        self.get("/netvalue", RetryPolicy::None).await
    }

    pub async fn get_api_token(&self) -> Result<ApiTokenReply, HttpError> {
        self.get("/apitoken", RetryPolicy::None).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn add_watch(&self, symbol: &str) -> Result<(), HttpError> {
        let ticket = WatchTicket {
            symbol: symbol.to_string(),
        };
        let _: Ack = self.post("/watch", &ticket, RetryPolicy::None).await?;
        Ok(())
    }

    pub async fn remove_watch(&self, symbol: &str) -> Result<(), HttpError> {
        let path = format!("/watch_del?sym={}", urlencoding::encode(symbol));
        let _: Ack = self.delete(&path, RetryPolicy::None).await?;
        Ok(())
    }

    pub async fn get_watch_list(&self) -> Result<WatchListReply, HttpError> {
        self.get("/watch_list", RetryPolicy::None).await
    }

    // ── Strategies ───────────────────────────────────────────────────────

    pub async fn get_rank(&self) -> Result<RanksReply, HttpError> {
        self.get("/rank", RetryPolicy::None).await
    }

    pub async fn get_ranks(&self) -> Result<RanksReply, HttpError> {
        self.get("/ranks", RetryPolicy::None).await
    }

    pub async fn subscribe(&self, hash: &str) -> Result<(), HttpError> {
        let ticket = SubTicket {
            hash: hash.to_string(),
        };
        let _: Ack = self.post("/sub", &ticket, RetryPolicy::None).await?;
        Ok(())
    }

    pub async fn get_sub_list(&self) -> Result<SubListReply, HttpError> {
        self.get("/sub_list", RetryPolicy::None).await
    }

    pub async fn get_all_tags(&self) -> Result<AllTagsReply, HttpError> {
        self.get("/alltags", RetryPolicy::None).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, path, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::POST, path, Some(body), retry)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::DELETE, path, None::<&()>, retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, path, body).await;
            }
            RetryPolicy::Transient => RetryConfig::transient(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 1..=config.max_attempts {
            match self.do_request::<T, B>(&method, path, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_transient() => {
                    tracing::warn!(
                        attempt,
                        max = config.max_attempts,
                        error = %e,
                        "Request to {} failed",
                        path
                    );
                    last_error = Some(e);
                    if attempt < config.max_attempts {
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_attempts,
                            delay_ms = config.delay.as_millis() as u64,
                            "Retrying request to {}",
                            path
                        );
                        futures_timer::Delay::new(config.delay).await;
                    }
                }
                // Application and decode failures will not self-correct.
                Err(e) => return Err(e),
            }
        }

        Err(HttpError::RetriesExhausted {
            attempts: config.max_attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .transport
            .client()
            .request(method.clone(), &url)
            .header("authorization", &self.token);

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_server_error() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(HttpError::ServerError {
                status: status.as_u16(),
                body: body_text,
            });
        }

        // Everything below 500 carries the JSON envelope; the envelope's
        // status decides the outcome, not the HTTP code.
        let bytes = resp.bytes().await?;

        let envelope: Envelope = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(
                path,
                body = %String::from_utf8_lossy(&bytes),
                "Reply carried no envelope"
            );
            HttpError::Decode(e)
        })?;
        if !envelope.is_success() {
            return Err(HttpError::Api(envelope.into_error()));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(
                path,
                body = %String::from_utf8_lossy(&bytes),
                "Failed to decode reply payload"
            );
            HttpError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> IitraderHttp {
        IitraderHttp::new(&server.uri(), "test-token").unwrap()
    }

    #[tokio::test]
    async fn test_requires_token() {
        let err = IitraderHttp::new("http://localhost:1", "").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[tokio::test]
    async fn test_token_attached_as_raw_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .and(header("authorization", "test-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"ret":"OK","right":"full"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let reply = client.get_right().await.unwrap();
        assert_eq!(reply.right, "full");
    }

    #[tokio::test]
    async fn test_envelope_error_surfaces_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote/2454.TW"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"ret":"ERR_NO_SYMBOL"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_quote("2454.TW", None).await.unwrap_err();
        match err {
            HttpError::Api(text) => assert_eq!(text, "ERR_NO_SYMBOL"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_envelope_error_wins_over_4xx_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"ret":"ERR_NO_AUTH"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_doc_id().await.unwrap_err();
        assert_eq!(err.to_string(), "ERR_NO_AUTH");
    }

    #[tokio::test]
    async fn test_quote_timestamp_param_appended() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote/2454.TW"))
            .and(query_param("ts", "1699920000"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"ret":"OK","v":"1185.5","ts":"1699920000"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let quote = client.get_quote("2454.TW", Some(1_699_920_000)).await.unwrap();
        assert_eq!(quote.timestamp, 1_699_920_000);
    }

    #[tokio::test]
    async fn test_single_attempt_when_retries_disabled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_right().await.unwrap_err();
        match err {
            HttpError::ServerError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transient_policy_exhausts_five_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .expect(5)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .get::<RightReply>("/right", RetryPolicy::Transient)
            .await
            .unwrap_err();
        match err {
            HttpError::RetriesExhausted { attempts, last_error } => {
                assert_eq!(attempts, 5);
                assert!(last_error.contains("503"));
            }
            other => panic!("expected RetriesExhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transient_policy_stops_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"ret":"OK","right":"full"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let reply = client
            .get::<RightReply>("/right", RetryPolicy::Transient)
            .await
            .unwrap();
        assert_eq!(reply.right, "full");
    }

    #[tokio::test]
    async fn test_decode_failure_is_fatal_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .get::<RightReply>("/right", RetryPolicy::Transient)
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[tokio::test]
    async fn test_order_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/order"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "sym": "2454.TW",
                "vol": "1000",
                "pri": "1185.5",
                "callback": "",
                "type": "1",
                "tag": "demo"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ret":"OK","roid":"ord-20231114-7"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let ticket = OrderTicket {
            symbol: "2454.TW".to_string(),
            volume: rust_decimal::Decimal::new(1000, 0),
            price: rust_decimal::Decimal::new(11855, 1),
            callback: String::new(),
            order_type: 1,
            tag: "demo".to_string(),
        };
        let receipt = client.submit_order(&ticket).await.unwrap();
        assert_eq!(receipt.order_id, "ord-20231114-7");
    }

    #[tokio::test]
    async fn test_cancel_sends_delete_with_roid() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/cancel"))
            .and(query_param("roid", "ord-20231114-7"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ret":"OK"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.cancel_order("ord-20231114-7").await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_envelope_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/right"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"right":"full"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_right().await.unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
