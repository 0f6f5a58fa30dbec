//! Pagemirror REST - Page fetcher adapter for Laravel-style backends
//!
//! Provides:
//! - A bearer-token HTTP client over `reqwest`
//! - An endpoint registry mapping collection keys to backend paths
//! - An [`IPageFetcher`](pagemirror_core::ports::IPageFetcher)
//!   implementation decoding the backend's paginator envelope
//!
//! ## Modules
//!
//! - [`client`] - Authenticated HTTP client with base URL handling
//! - [`endpoints`] - Collection-key → endpoint registry
//! - [`fetcher`] - The page fetcher adapter and payload decoding

pub mod client;
pub mod endpoints;
pub mod fetcher;

pub use client::RestClient;
pub use endpoints::{Endpoint, EndpointRegistry};
pub use fetcher::RestPageFetcher;
