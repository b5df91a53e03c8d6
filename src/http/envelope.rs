//! The reply envelope shared by every endpoint.
//!
//! Every response body is a JSON object carrying a `ret` field next to the
//! payload fields: `"OK"` on success, any other value is an error code that
//! doubles as the error text. The envelope is decoded first and the payload
//! only on success, so reply types never carry the status themselves.

use serde::Deserialize;

/// Envelope status value that marks a successful reply.
pub const STATUS_OK: &str = "OK";

/// Status wrapper decoded out of every response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub ret: String,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.ret == STATUS_OK
    }

    /// The raw status text, used verbatim as the application error message.
    pub fn into_error(self) -> String {
        self.ret
    }
}

/// Marker payload for endpoints that answer with the bare envelope.
#[derive(Debug, Deserialize)]
pub struct Ack {}
