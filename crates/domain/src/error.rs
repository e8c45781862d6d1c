//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeRelayError`] at the port boundary.

/// Top-level error for homerelay use-cases.
#[derive(Debug, thiserror::Error)]
pub enum HomeRelayError {
    /// The platform could not be reached (DNS, TLS, connect, timeout, …).
    #[error("upstream request failed")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The platform answered with a body that could not be decoded.
    #[error("invalid upstream response")]
    Decode(#[from] DecodeError),

    /// A relay command could not be serialized into a content instance.
    #[error("failed to encode relay command")]
    Encode(#[source] serde_json::Error),
}

/// A successful upstream reply whose body is not valid JSON.
#[derive(Debug, thiserror::Error)]
#[error("upstream replied with status {status} and a body that is not valid JSON")]
pub struct DecodeError {
    /// Status code the body came with.
    pub status: u16,
    /// Underlying parse failure.
    #[source]
    pub source: serde_json::Error,
}
