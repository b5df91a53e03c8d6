//! HTTP client layer — `IitraderHttp` over a DNS-caching transport, with
//! per-request retry policies and envelope-first reply decoding.

pub mod client;
pub mod envelope;
pub mod retry;
pub mod transport;

pub use client::IitraderHttp;
pub use envelope::{Envelope, STATUS_OK};
pub use retry::{RetryConfig, RetryPolicy};
pub use transport::Transport;
