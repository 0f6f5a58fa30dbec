//! Endpoint registry
//!
//! Maps collection keys to backend endpoints. Each paginated listing on
//! the backend has a fixed path and wraps its paginator under a fixed
//! field inside the response's `data` object; the registry records both
//! so the fetcher can build the request and find the payload.

use std::collections::HashMap;

use pagemirror_core::domain::CollectionKey;

/// One paginated backend endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API base URL, e.g. "/get_news"
    pub path: String,
    /// Field under the response's `data` object holding the paginator,
    /// e.g. "news"
    pub envelope_key: String,
}

impl Endpoint {
    /// Creates a new endpoint description
    pub fn new(path: impl Into<String>, envelope_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            envelope_key: envelope_key.into(),
        }
    }
}

/// Registry of paginated endpoints, keyed by collection
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: HashMap<CollectionKey, Endpoint>,
}

impl EndpointRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: HashMap::new(),
        }
    }

    /// Builder-style registration
    #[must_use]
    pub fn with(
        mut self,
        key: CollectionKey,
        path: impl Into<String>,
        envelope_key: impl Into<String>,
    ) -> Self {
        self.register(key, Endpoint::new(path, envelope_key));
        self
    }

    /// Registers or replaces the endpoint for a collection
    pub fn register(&mut self, key: CollectionKey, endpoint: Endpoint) {
        self.endpoints.insert(key, endpoint);
    }

    /// Looks up the endpoint for a collection
    #[must_use]
    pub fn resolve(&self, key: &CollectionKey) -> Option<&Endpoint> {
        self.endpoints.get(key)
    }
}
