//! Remote page fetcher port (driven/secondary port)
//!
//! This module defines the interface for fetching one page of a
//! server-paginated collection. The primary implementation targets a
//! Laravel-style REST backend, but the trait is transport-agnostic.
//!
//! ## Design Notes
//!
//! - Returns the typed [`FetchError`] taxonomy rather than `anyhow`,
//!   because fetch errors are part of collection state: the store keeps
//!   them, compares them, and hands them to the UI.
//! - The fetcher performs **no retry**. Retry is an explicit user action
//!   (pull-to-refresh, scroll-retry) driven through the orchestrator.
//! - Uses `#[async_trait]` for async trait methods.

use crate::domain::errors::FetchError;
use crate::domain::newtypes::ItemId;
use crate::domain::page::{PageRequest, PageResult};

/// An item that can live in a mirrored collection
///
/// Items are opaque to the core except for a stable identity within
/// their collection, which the merge rules use to detect duplicate ids
/// on append.
pub trait RemoteItem: Clone + Send + Sync + 'static {
    /// Stable identity of this item within its collection
    fn item_id(&self) -> ItemId;
}

/// Port trait for fetching pages of a remote collection
///
/// Implementations handle transport, authentication, payload decoding,
/// and error mapping. One call fetches exactly one page; pagination
/// sequencing belongs to the orchestrator.
#[async_trait::async_trait]
pub trait IPageFetcher<T: RemoteItem>: Send + Sync {
    /// Fetches one page of the requested collection
    ///
    /// # Arguments
    /// * `request` - Collection, 1-based page number, and filters
    ///
    /// # Errors
    /// - [`FetchError::Network`] when no response was received
    /// - [`FetchError::Server`] on a non-success HTTP status
    /// - [`FetchError::Payload`] when the body cannot be decoded
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<T>, FetchError>;
}
