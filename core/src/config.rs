//! Client configuration.

use std::time::Duration;

/// Dispatcher configuration. The defaults point at the production endpoint
/// with mock mode on, matching how the app ships during development.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Prefix for transport-mode request URLs.
    pub base_url: String,
    /// Per-request timeout handed to the transport.
    pub timeout: Duration,
    /// When true, requests resolve against the fixture catalog.
    pub mock_mode: bool,
    /// Simulated latency applied before every mock response.
    pub mock_latency: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.photogallery.com".to_string(),
            timeout: Duration::from_secs(10),
            mock_mode: true,
            mock_latency: Duration::from_millis(500),
        }
    }
}
