//! Request dispatcher: mock mode against the fixture catalog, or one
//! outbound call through the injected transport.
//!
//! # Design
//! `dispatch` is the single funnel every facade method goes through. In mock
//! mode it sleeps the simulated latency, logs the request, and resolves the
//! route table; in transport mode it builds one `HttpRequest` and executes
//! it with no retry. A non-200 status or transport failure is an error; a
//! missing mock route is a 404 envelope, not an error.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::fixtures::FIXTURES;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::routes::{MockRouter, Payload};
use crate::types::ApiResponse;

pub struct Dispatcher {
    config: ApiConfig,
    router: MockRouter,
    transport: Option<Arc<dyn Transport>>,
}

impl Dispatcher {
    /// A dispatcher that answers everything from fixtures.
    pub fn mock(config: ApiConfig) -> Self {
        Self {
            config,
            router: MockRouter::gallery(),
            transport: None,
        }
    }

    /// A dispatcher backed by a host transport. Mock mode still wins if
    /// `config.mock_mode` is set.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            router: MockRouter::gallery(),
            transport: Some(transport),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve a logical route to a typed envelope.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload,
    ) -> Result<ApiResponse<T>, ApiError> {
        if self.config.mock_mode {
            self.dispatch_mock(method, path, &payload).await
        } else {
            self.dispatch_transport(method, path, &payload).await
        }
    }

    async fn dispatch_mock<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &Payload,
    ) -> Result<ApiResponse<T>, ApiError> {
        tokio::time::sleep(self.config.mock_latency).await;
        debug!(method = method.as_str(), path, "mock request");
        self.router.handle(&FIXTURES, method, path, payload).decode()
    }

    async fn dispatch_transport<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &Payload,
    ) -> Result<ApiResponse<T>, ApiError> {
        let transport = self.transport.as_deref().ok_or(ApiError::NoTransport)?;
        let body = if payload.is_empty() {
            None
        } else {
            Some(serde_json::to_string(payload).map_err(ApiError::Serialize)?)
        };
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers: vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )],
            body,
            timeout: self.config.timeout,
        };
        let response: HttpResponse = transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        if response.status != 200 {
            return Err(ApiError::Http {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(ApiError::Decode)
    }
}
