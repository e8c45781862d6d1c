//! Raw replies from the IoT platform and how they are decoded.

use serde_json::Value;

use crate::error::DecodeError;

/// Status code and body of a platform reply, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl UpstreamReply {
    /// Create a reply from its parts.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, DecodeError> {
        serde_json::from_slice(&self.body).map_err(|source| DecodeError {
            status: self.status,
            source,
        })
    }

    /// Decode the body as JSON, falling back to the body text.
    ///
    /// An empty body yields `null`; a body that is not JSON is returned as a
    /// JSON string.
    #[must_use]
    pub fn json_lenient(&self) -> Value {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&self.body).into_owned())
        })
    }
}
