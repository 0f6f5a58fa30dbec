//! Shared test helpers for REST fetcher integration tests
//!
//! Provides wiremock-based mock backend setup. Each helper mounts the
//! necessary mock endpoints and returns a configured fetcher pointing at
//! the mock server.

use serde::Deserialize;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagemirror_core::domain::{CollectionKey, ItemId};
use pagemirror_core::ports::RemoteItem;
use pagemirror_rest::{EndpointRegistry, RestClient, RestPageFetcher};

/// Item type used across the integration tests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
}

impl RemoteItem for Contact {
    fn item_id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}

pub fn contacts_key() -> CollectionKey {
    CollectionKey::new("contacts").unwrap()
}

/// Sets up a mock server and a fetcher with the contacts endpoint
/// registered, and returns the pair.
pub async fn setup_fetcher() -> (MockServer, RestPageFetcher<Contact>) {
    let server = MockServer::start().await;

    let client = RestClient::with_base_url("test-access-token", server.uri());
    let registry = EndpointRegistry::new().with(contacts_key(), "/get_contacts", "contacts");

    (server, RestPageFetcher::new(client, registry))
}

/// Builds a paginator envelope body in the backend's shape
pub fn paginator_body(
    items: serde_json::Value,
    current_page: u32,
    last_page: u32,
    total: u64,
    per_page: u32,
) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "contacts": {
                "data": items,
                "current_page": current_page,
                "last_page": last_page,
                "total": total,
                "per_page": per_page,
                "next_page_url": if current_page < last_page {
                    serde_json::json!(format!("/get_contacts?page={}", current_page + 1))
                } else {
                    serde_json::Value::Null
                },
                "prev_page_url": null
            }
        }
    })
}

/// Mounts the contacts endpoint returning the given page for a specific
/// `page` query parameter.
pub async fn mount_contacts_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
