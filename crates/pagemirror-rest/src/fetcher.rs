//! REST page fetcher
//!
//! Implements the [`IPageFetcher`] port against a Laravel-style backend.
//! One call fetches one page: `GET {base}{path}?page=N&<filters>` with
//! bearer auth, decoding the paginator envelope
//!
//! ```json
//! {
//!   "data": {
//!     "<envelope_key>": {
//!       "data": [ ... items ... ],
//!       "current_page": 1,
//!       "last_page": 3,
//!       "total": 25,
//!       "per_page": 10,
//!       "next_page_url": "...",
//!       "prev_page_url": null
//!     }
//!   },
//!   "message": "..."
//! }
//! ```
//!
//! No retry, no caching, no backoff: a failed fetch surfaces its error
//! and the store keeps whatever it already had.

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use pagemirror_core::domain::{FetchError, PageRequest, PageResult};
use pagemirror_core::ports::{IPageFetcher, RemoteItem};

use crate::client::RestClient;
use crate::endpoints::EndpointRegistry;

// ============================================================================
// Backend response types (JSON deserialization)
// ============================================================================

/// Raw paginator object as the backend serializes it
///
/// `last_page` and `per_page` are occasionally omitted by older
/// endpoints; a missing `last_page` is treated as "this is the only
/// page we know of" so the cursor never invents pages the server did
/// not announce.
#[derive(Debug, Deserialize)]
struct BackendPage<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    data: Vec<T>,

    /// 1-based index of this page
    current_page: u32,

    /// 1-based index of the last page
    last_page: Option<u32>,

    /// Total item count across all pages
    total: Option<u64>,

    /// Server page size
    per_page: Option<u32>,
}

/// Error body shape on non-2xx responses
#[derive(Debug, Deserialize)]
struct BackendError {
    message: Option<String>,
}

// ============================================================================
// RestPageFetcher
// ============================================================================

/// Page fetcher adapter for one item type
///
/// Holds the authenticated client and the endpoint registry; the item
/// type is fixed per fetcher instance, matching the store it feeds.
pub struct RestPageFetcher<T> {
    client: RestClient,
    registry: EndpointRegistry,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestPageFetcher<T> {
    /// Creates a new fetcher over the given client and endpoint registry
    pub fn new(client: RestClient, registry: EndpointRegistry) -> Self {
        Self {
            client,
            registry,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the underlying client
    pub fn client(&self) -> &RestClient {
        &self.client
    }
}

/// Decodes the paginator for `envelope_key` out of a response body
///
/// Navigates `body.data.<envelope_key>`, deserializes the paginator, and
/// maps it into a validated [`PageResult`].
fn decode_page<T: DeserializeOwned>(
    body: &serde_json::Value,
    envelope_key: &str,
) -> Result<PageResult<T>, FetchError> {
    let paginator = body
        .get("data")
        .and_then(|data| data.get(envelope_key))
        .ok_or_else(|| {
            FetchError::Payload(format!(
                "response has no data.{envelope_key} paginator object"
            ))
        })?;

    let page: BackendPage<T> = serde_json::from_value(paginator.clone())
        .map_err(|err| FetchError::Payload(format!("cannot decode paginator: {err}")))?;

    let last_page = page.last_page.unwrap_or(page.current_page);

    PageResult::new(
        page.data,
        page.current_page,
        last_page,
        page.total.unwrap_or(0),
        page.per_page.unwrap_or(0),
    )
    .map_err(|err| FetchError::Payload(err.to_string()))
}

/// Extracts a human-readable message from a non-2xx response body
///
/// Falls back to the status line when the body carries no `message`.
fn rejection_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<BackendError>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        })
}

#[async_trait::async_trait]
impl<T> IPageFetcher<T> for RestPageFetcher<T>
where
    T: RemoteItem + DeserializeOwned,
{
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<T>, FetchError> {
        let endpoint = self.registry.resolve(&request.collection).ok_or_else(|| {
            FetchError::Payload(format!(
                "no endpoint registered for collection {}",
                request.collection
            ))
        })?;

        debug!(
            collection = %request.collection,
            page = request.page,
            path = %endpoint.path,
            "Fetching page"
        );

        let mut builder = self
            .client
            .request(Method::GET, &endpoint.path)
            .query(&[("page", request.page.to_string())]);
        for (name, value) in request.filters.query_pairs() {
            builder = builder.query(&[(name, value)]);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = rejection_message(status, &body);

            warn!(
                collection = %request.collection,
                page = request.page,
                status = status.as_u16(),
                "Backend rejected page fetch"
            );

            return Err(FetchError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| FetchError::Payload(format!("response body is not JSON: {err}")))?;

        let result = decode_page(&body, &endpoint.envelope_key)?;

        debug!(
            collection = %request.collection,
            page = result.current_page,
            last_page = result.last_page,
            items = result.items.len(),
            "Fetched page"
        );

        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
