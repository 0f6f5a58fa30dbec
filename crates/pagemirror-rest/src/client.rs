//! Authenticated REST client
//!
//! Provides a typed HTTP client for the backend API. Handles bearer
//! authentication headers, base URL construction, and per-request
//! timeouts.
//!
//! Token acquisition and refresh are out of scope: the access token is
//! an opaque input, replaced via [`set_access_token`](RestClient::set_access_token)
//! when the host application rotates it.

use std::time::Duration;

use pagemirror_core::config::ApiConfig;
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// Default per-request timeout used by [`RestClient::with_base_url`]
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for backend API calls
///
/// Wraps `reqwest::Client` with authentication headers and base URL
/// construction. Cloning is cheap; the underlying connection pool is
/// shared.
#[derive(Clone)]
pub struct RestClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests, without a trailing slash
    base_url: String,
    /// Current bearer access token
    access_token: String,
    /// Applied to every request
    timeout: Duration,
}

impl RestClient {
    /// Creates a new RestClient from API configuration
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout settings
    /// * `access_token` - A valid bearer token for the backend
    pub fn new(config: &ApiConfig, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Creates a new RestClient with a custom base URL (useful for testing)
    ///
    /// # Arguments
    /// * `access_token` - A valid bearer token
    /// * `base_url` - Custom base URL for API requests
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Updates the access token (e.g., after the host refreshed it)
    ///
    /// # Arguments
    /// * `token` - The new access token
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
        debug!("Updated RestClient access token");
    }

    /// Returns a reference to the current access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL, adds the Authorization header,
    /// and applies the configured timeout.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, ...)
    /// * `path` - API path relative to base URL (e.g., "/get_news")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
            .timeout(self.timeout)
    }
}
