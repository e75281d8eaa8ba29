//! Error types for the todo API client.
//!
//! # Design
//! Every non-success outcome of an HTTP round-trip — network failure or
//! non-2xx status — surfaces as a [`TransportFailure`] carrying the status
//! code and reason text, forwarded to the caller verbatim. The client never
//! interprets, retries, or suppresses a failure. The remaining `ApiError`
//! variants exist only because JSON (de)serialization is fallible.

use thiserror::Error;

/// A non-success outcome reported by the transport or the server.
///
/// `status` is the HTTP status code; 0 means the failure happened below
/// HTTP and no response exists (connection refused, DNS, ...). `reason` is
/// the status text or the underlying transport's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status}: {reason}")]
pub struct TransportFailure {
    pub status: u16,
    pub reason: String,
}

impl TransportFailure {
    /// Failure with no HTTP response behind it.
    pub fn no_response(reason: impl Into<String>) -> Self {
        Self {
            status: 0,
            reason: reason.into(),
        }
    }
}

/// Errors returned by `TodoClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport reported a failure, forwarded unchanged.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportFailure),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
