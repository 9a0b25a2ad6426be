//! HTTP plumbing for the transport-backed request path.
//!
//! # Design
//! Requests and responses are plain data. The core builds an `HttpRequest`
//! and interprets the `HttpResponse`; the actual round-trip is performed by
//! an injected [`Transport`] implementation supplied by the host platform.
//! The crate ships no real transport — the host's network stack is an
//! external capability, and tests substitute in-memory fakes.
//!
//! All fields use owned types (`String`, `Vec`) so values can cross the
//! dispatcher boundary without lifetime concerns.

use std::time::Duration;

use async_trait::async_trait;

/// Boxed error produced by a transport, surfaced to callers unmodified.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// HTTP method for a request. Hashable so it can key the mock route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by the dispatcher's transport path. For GET requests the payload is
/// still carried in `body`; the host transport decides how to encode it on
/// the wire (typically as a query string).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data, produced by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The host network capability: executes one request, no retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}
