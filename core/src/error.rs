//! Error types for the gallery API client.
//!
//! # Design
//! A missing route in mock mode is not an error: the dispatcher answers it
//! with a structured 404 envelope, so callers inspect `ApiResponse::code`.
//! `ApiError` covers the transport-backed path and envelope decoding. The
//! serialization and deserialization directions get distinct variants so a
//! failure pinpoints which side of the wire broke.

use thiserror::Error;

use crate::http::BoxError;

/// Errors returned by `Dispatcher::dispatch` and the `ApiClient` facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-200 status.
    #[error("request failed: {status}")]
    Http { status: u16 },

    /// The transport failed before producing a response. The underlying
    /// error is carried unmodified.
    #[error("transport error: {0}")]
    Transport(BoxError),

    /// The request payload could not be serialized to JSON.
    #[error("payload serialization failed: {0}")]
    Serialize(serde_json::Error),

    /// The response envelope could not be decoded into the expected type.
    #[error("response decoding failed: {0}")]
    Decode(serde_json::Error),

    /// Mock mode is disabled but no transport was injected.
    #[error("mock mode disabled and no transport configured")]
    NoTransport,
}
