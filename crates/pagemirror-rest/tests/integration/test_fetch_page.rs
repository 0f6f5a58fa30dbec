//! Integration tests for the REST page fetcher
//!
//! Verifies end-to-end behavior against a wiremock-based mock backend:
//! - Page fetch with paginator decoding
//! - Filters forwarded as query parameters
//! - Bearer authentication header
//! - Server rejection and malformed payload mapping

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagemirror_core::domain::{FetchError, Filters, PageRequest};
use pagemirror_core::ports::IPageFetcher;
use pagemirror_rest::{EndpointRegistry, RestClient, RestPageFetcher};

use crate::common::{self, contacts_key, Contact};

#[tokio::test]
async fn test_fetch_first_page() {
    let (server, fetcher) = common::setup_fetcher().await;

    let body = common::paginator_body(
        serde_json::json!([
            { "id": 1, "name": "Asha" },
            { "id": 2, "name": "Ravi" }
        ]),
        1,
        3,
        25,
        10,
    );
    common::mount_contacts_page(&server, 1, body).await;

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let result = fetcher.fetch_page(&request).await.expect("fetch failed");

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].name, "Asha");
    assert_eq!(result.current_page, 1);
    assert_eq!(result.last_page, 3);
    assert_eq!(result.total, 25);
    assert!(result.has_next());
}

#[tokio::test]
async fn test_fetch_later_page() {
    let (server, fetcher) = common::setup_fetcher().await;

    let body = common::paginator_body(
        serde_json::json!([ { "id": 3, "name": "Mira" } ]),
        3,
        3,
        25,
        10,
    );
    common::mount_contacts_page(&server, 3, body).await;

    let request = PageRequest::new(contacts_key(), 3, Filters::new()).unwrap();
    let result = fetcher.fetch_page(&request).await.expect("fetch failed");

    assert_eq!(result.current_page, 3);
    assert!(!result.has_next());
}

#[tokio::test]
async fn test_filters_forwarded_as_query_params() {
    let (server, fetcher) = common::setup_fetcher().await;

    // Mock only matches when both filters arrive as query parameters
    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .and(query_param("page", "1"))
        .and(query_param("subcategory", "12"))
        .and(query_param("keyword", "patel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::paginator_body(
            serde_json::json!([ { "id": 5, "name": "Deepa Patel" } ]),
            1,
            1,
            1,
            10,
        )))
        .mount(&server)
        .await;

    let filters = Filters::new().with("subcategory", 12).with("keyword", "patel");
    let request = PageRequest::new(contacts_key(), 1, filters).unwrap();
    let result = fetcher.fetch_page(&request).await.expect("fetch failed");

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "Deepa Patel");
}

#[tokio::test]
async fn test_bearer_auth_header_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::paginator_body(
            serde_json::json!([]),
            1,
            1,
            0,
            10,
        )))
        .mount(&server)
        .await;

    let client = RestClient::with_base_url("secret-token", server.uri());
    let registry = EndpointRegistry::new().with(contacts_key(), "/get_contacts", "contacts");
    let fetcher: RestPageFetcher<Contact> = RestPageFetcher::new(client, registry);

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let result = fetcher.fetch_page(&request).await;

    // Without the matching header the mock does not respond 200
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_server_rejection_maps_status_and_message() {
    let (server, fetcher) = common::setup_fetcher().await;

    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "Unauthenticated" })),
        )
        .mount(&server)
        .await;

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let error = fetcher.fetch_page(&request).await.unwrap_err();

    assert_eq!(
        error,
        FetchError::Server {
            status: 401,
            message: "Unauthenticated".to_string(),
        }
    );
}

#[tokio::test]
async fn test_server_rejection_without_message_body() {
    let (server, fetcher) = common::setup_fetcher().await;

    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let error = fetcher.fetch_page(&request).await.unwrap_err();

    match error {
        FetchError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload_maps_to_payload_error() {
    let (server, fetcher) = common::setup_fetcher().await;

    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })),
        )
        .mount(&server)
        .await;

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let error = fetcher.fetch_page(&request).await.unwrap_err();

    assert!(matches!(error, FetchError::Payload(_)));
}

#[tokio::test]
async fn test_non_json_body_maps_to_payload_error() {
    let (server, fetcher) = common::setup_fetcher().await;

    Mock::given(method("GET"))
        .and(path("/get_contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let request = PageRequest::new(contacts_key(), 1, Filters::new()).unwrap();
    let error = fetcher.fetch_page(&request).await.unwrap_err();

    assert!(matches!(error, FetchError::Payload(_)));
}

#[tokio::test]
async fn test_unregistered_collection_fails_without_network() {
    let (_server, fetcher) = common::setup_fetcher().await;

    let unknown = pagemirror_core::domain::CollectionKey::new("gallery").unwrap();
    let request = PageRequest::new(unknown, 1, Filters::new()).unwrap();
    let error = fetcher.fetch_page(&request).await.unwrap_err();

    assert!(matches!(error, FetchError::Payload(_)));
}
