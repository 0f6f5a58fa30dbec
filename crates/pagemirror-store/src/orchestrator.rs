//! Fetch orchestrator
//!
//! The [`FetchOrchestrator`] is the single entry point UI code calls. It
//! sequences cursor lookup, in-flight deduplication, the fetcher call,
//! and the store commit.
//!
//! ## State machine (per collection key)
//!
//! ```text
//! Idle ──requestFirstPage/requestNextPage──→ Loading
//! Loading ──fetch ok──→ Idle (page committed)
//! Loading ──fetch err──→ Failed (items untouched)
//! Idle/Failed ──requestFirstPage(new filters)──→ Loading (always honored;
//!     the superseded in-flight response is discarded when it lands)
//! ```
//!
//! `requestNextPage` while `Loading` is a no-op, not a queue: the classic
//! double-trigger on fast scroll collapses into one fetch. There is no
//! cancellation primitive; stale responses are filtered post-hoc by the
//! store's filters-match check.
//!
//! Fetch errors never propagate to the caller as `Err`. They terminate
//! here, recorded in the collection's phase and reflected in the returned
//! outcome, so the UI always has something renderable: items, a loading
//! indicator, or an error.

use std::sync::Arc;

use tracing::{debug, info};

use pagemirror_core::domain::{CollectionKey, FetchError, Filters, PaginationCursor};
use pagemirror_core::ports::{IPageFetcher, RemoteItem};

use crate::store::{CollectionStore, CommitOutcome, NextLoadDecision};

// ============================================================================
// Outcome types
// ============================================================================

/// What happened to a first-page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstPageOutcome {
    /// The page was fetched and committed; the collection was reset
    Loaded,
    /// A newer first-page request was recorded while this one was in
    /// flight; this response was discarded
    Superseded,
    /// The fetch failed; the error is also recorded in the collection phase
    Failed(FetchError),
}

/// What happened to a next-page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPageOutcome {
    /// The page was fetched and appended
    Loaded,
    /// A fetch for this collection was already in flight; no new fetch
    /// was issued
    AlreadyInFlight,
    /// The cursor is exhausted; no fetch was issued
    EndOfCollection,
    /// A newer first-page request superseded this one mid-flight; this
    /// response was discarded
    Superseded,
    /// The fetch failed; the error is also recorded in the collection phase
    Failed(FetchError),
}

// ============================================================================
// FetchOrchestrator
// ============================================================================

/// Drives page fetches for one item type against one fetcher
///
/// Holds no per-collection state of its own; everything durable lives in
/// the [`CollectionStore`]. Cheap to share behind an `Arc`.
pub struct FetchOrchestrator<T: RemoteItem> {
    fetcher: Arc<dyn IPageFetcher<T>>,
    store: Arc<CollectionStore<T>>,
}

impl<T: RemoteItem> FetchOrchestrator<T> {
    /// Creates a new orchestrator over the given fetcher and store
    pub fn new(fetcher: Arc<dyn IPageFetcher<T>>, store: Arc<CollectionStore<T>>) -> Self {
        Self { fetcher, store }
    }

    /// The store this orchestrator commits into
    ///
    /// UI code reads collection snapshots from here and applies local
    /// mutations (`remove_item`, `update_item`) after server-side writes.
    pub fn store(&self) -> &Arc<CollectionStore<T>> {
        &self.store
    }

    /// Fetches page 1 of a collection, resetting it on success
    ///
    /// Covers initial load, pull-to-refresh, and filter changes. Never
    /// suppressed by an in-flight fetch: the new request's filters are
    /// recorded before the fetch is issued, so any older response that
    /// lands afterwards fails the store's filters-match check and is
    /// discarded.
    pub async fn request_first_page(
        &self,
        key: &CollectionKey,
        filters: Filters,
    ) -> FirstPageOutcome {
        let request = PaginationCursor::first_page_request(key.clone(), filters);
        self.store.begin_first_load(key, &request.filters);

        debug!(collection = %key, "Issuing first-page fetch");

        match self.fetcher.fetch_page(&request).await {
            Ok(result) => match self.store.commit_page(&request, result) {
                CommitOutcome::Applied => {
                    info!(collection = %key, "First page loaded");
                    FirstPageOutcome::Loaded
                }
                CommitOutcome::StaleDiscarded => FirstPageOutcome::Superseded,
            },
            Err(error) => match self.store.fail_load(&request, error.clone()) {
                CommitOutcome::Applied => FirstPageOutcome::Failed(error),
                CommitOutcome::StaleDiscarded => FirstPageOutcome::Superseded,
            },
        }
    }

    /// Fetches the next page of a collection, appending it on success
    ///
    /// No-op when a fetch for this key is already in flight (the request
    /// is dropped, not queued) or when the cursor is exhausted — in both
    /// cases the fetcher is never invoked.
    pub async fn request_next_page(&self, key: &CollectionKey) -> NextPageOutcome {
        let request = match self.store.begin_next_load(key) {
            NextLoadDecision::Begin(request) => request,
            NextLoadDecision::AlreadyLoading => return NextPageOutcome::AlreadyInFlight,
            NextLoadDecision::Exhausted => return NextPageOutcome::EndOfCollection,
        };

        debug!(collection = %key, page = request.page, "Issuing next-page fetch");

        match self.fetcher.fetch_page(&request).await {
            Ok(result) => match self.store.commit_page(&request, result) {
                CommitOutcome::Applied => {
                    info!(collection = %key, page = request.page, "Next page loaded");
                    NextPageOutcome::Loaded
                }
                CommitOutcome::StaleDiscarded => NextPageOutcome::Superseded,
            },
            Err(error) => match self.store.fail_load(&request, error.clone()) {
                CommitOutcome::Applied => NextPageOutcome::Failed(error),
                CommitOutcome::StaleDiscarded => NextPageOutcome::Superseded,
            },
        }
    }

    /// Clears a collection back to its initial state
    ///
    /// Convenience pass-through to [`CollectionStore::invalidate`] for
    /// callers that only hold the orchestrator.
    pub fn invalidate(&self, key: &CollectionKey) {
        self.store.invalidate(key);
    }
}
