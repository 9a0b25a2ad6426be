//! Typed client core for the photo gallery API.
//!
//! # Overview
//! Every request funnels through a dispatcher that either resolves against a
//! static fixture catalog ("mock mode", the default) or forwards one call to
//! an injected host transport. Responses arrive in a `{code, message, data}`
//! envelope; unknown mock routes answer a 404 envelope rather than erroring.
//!
//! # Design
//! - `ApiClient` is a thin typed facade: each method shapes a payload and
//!   names a fixed route.
//! - Mock routing is a registered lookup table keyed by method + path.
//! - The network is an external capability behind the `Transport` trait;
//!   the crate ships no real implementation.
//! - Fixture data is immutable: the mutation routes (favorites, category
//!   create, upload) are unregistered and fall through to the 404 envelope.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod routes;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use dispatch::Dispatcher;
pub use error::ApiError;
pub use fixtures::{Fixtures, FIXTURES};
pub use http::{BoxError, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use routes::{MockRouter, Payload};
pub use types::{
    ApiResponse, CategoryItem, ImageItem, ImageUpload, NewCategory, PaginatedResponse,
    PaginationParams, UserInfo,
};
