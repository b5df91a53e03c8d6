//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection, write, or read failure before a reply arrived.
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The service answered with a 5xx status.
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// A well-formed reply whose envelope status was not `"OK"`. Displays
    /// as exactly the status text the service sent.
    #[error("{0}")]
    Api(String),

    /// The reply body did not match the expected shape.
    #[error("Failed to decode reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Retries exhausted after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether the failure is transient: transport errors and 5xx replies
    /// may clear on a reattempt, application and decode failures will not.
    pub fn is_transient(&self) -> bool {
        matches!(self, HttpError::Reqwest(_) | HttpError::ServerError { .. })
    }
}
