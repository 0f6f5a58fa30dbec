//! Collection store
//!
//! The [`CollectionStore`] owns the authoritative client-side view of
//! every mirrored collection and applies the merge semantics:
//!
//! - **Reset** on a page-1 commit (initial load, pull-to-refresh, filter
//!   change): the visible items are replaced wholesale.
//! - **Append** on a later-page commit: items are extended in server
//!   order, with duplicate ids dropped (first occurrence wins).
//! - **Stale discard**: a commit or failure whose filters no longer match
//!   the most recently recorded ones is ignored. Responses can arrive out
//!   of request order, so acceptance is anchored to what was last
//!   *requested*, not what lands last.
//!
//! Every mutation of one key's state runs under that key's map entry
//! guard, so `begin`/`commit`/`fail` for a single collection are
//! serialized even in a multi-threaded host. Collections are independent;
//! there is no cross-key locking.

use std::collections::HashSet;

use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, warn};

use pagemirror_core::domain::{
    CollectionKey, CollectionState, FetchError, Filters, ItemId, LoadPhase, PageRequest,
    PageResult, PaginationCursor,
};
use pagemirror_core::ports::RemoteItem;

// ============================================================================
// Decision and outcome types
// ============================================================================

/// Result of asking the store to begin a next-page load
///
/// Computed atomically under the collection's entry guard so two
/// concurrent callers cannot both receive `Begin` for the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextLoadDecision {
    /// The load may proceed; fetch this request
    Begin(PageRequest),
    /// A fetch for this collection is already in flight
    AlreadyLoading,
    /// The cursor has no next page (or the collection was never fetched)
    Exhausted,
}

/// Result of delivering a fetch outcome to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The result was accepted and collection state was updated
    Applied,
    /// The result belonged to a superseded request and was discarded
    /// without touching collection state
    StaleDiscarded,
}

// ============================================================================
// CollectionStore
// ============================================================================

/// Owns all per-collection state for one item type
///
/// States are created lazily on first use and retained for the process
/// lifetime. Reads return snapshot clones; all mutation goes through the
/// explicit operations below, normally driven by the
/// [`FetchOrchestrator`](crate::orchestrator::FetchOrchestrator).
pub struct CollectionStore<T: RemoteItem> {
    collections: DashMap<CollectionKey, CollectionState<T>>,
}

impl<T: RemoteItem> CollectionStore<T> {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Returns a snapshot of the collection's current state
    ///
    /// Unseen keys yield the default empty/idle state, so the UI can
    /// always render something.
    #[must_use]
    pub fn state(&self, key: &CollectionKey) -> CollectionState<T> {
        self.collections
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Begins a first-page load
    ///
    /// Always proceeds, even while another fetch is in flight: a refresh
    /// or filter change supersedes whatever came before. Sets the phase
    /// to `Loading`, clears any previous error, and records `filters` as
    /// the collection's most recent request — the anchor the stale-
    /// response check compares against.
    pub fn begin_first_load(&self, key: &CollectionKey, filters: &Filters) {
        let mut entry = self.collections.entry(key.clone()).or_default();
        let state = entry.value_mut();

        state.phase = LoadPhase::Loading;
        state.filters = Some(filters.clone());

        debug!(collection = %key, "Begin first-page load");
    }

    /// Begins a next-page load if one is allowed
    ///
    /// Atomic check-and-begin: under the entry guard, refuses when a
    /// fetch is already in flight (duplicate-suppression — the request is
    /// dropped, not queued) or when the cursor is exhausted. Otherwise
    /// marks the collection `Loading` and returns the request to fetch,
    /// carrying the recorded filters.
    pub fn begin_next_load(&self, key: &CollectionKey) -> NextLoadDecision {
        let mut entry = self.collections.entry(key.clone()).or_default();
        let state = entry.value_mut();

        if state.is_loading() {
            debug!(collection = %key, "Next-page load suppressed: already in flight");
            return NextLoadDecision::AlreadyLoading;
        }

        let filters = state.filters.clone().unwrap_or_default();
        let Some(request) = state.cursor.next_page_request(key.clone(), filters) else {
            debug!(collection = %key, "Next-page load suppressed: exhausted");
            return NextLoadDecision::Exhausted;
        };

        state.phase = LoadPhase::Loading;

        debug!(collection = %key, page = request.page, "Begin next-page load");
        NextLoadDecision::Begin(request)
    }

    /// Commits a successful page result
    ///
    /// Applies reset semantics for page 1 and append semantics for later
    /// pages, updates the cursor from the result, returns the phase to
    /// `Idle`, and stamps `last_synced`.
    ///
    /// A result whose filters no longer match the recorded ones is a
    /// stale response from a superseded request: it is discarded without
    /// touching items, cursor, or phase, and only logging observes it.
    pub fn commit_page(
        &self,
        request: &PageRequest,
        result: PageResult<T>,
    ) -> CommitOutcome {
        let mut entry = self.collections.entry(request.collection.clone()).or_default();
        let state = entry.value_mut();

        if state.filters.as_ref() != Some(&request.filters) {
            debug!(
                collection = %request.collection,
                page = request.page,
                "Discarding stale page result (filters superseded)"
            );
            return CommitOutcome::StaleDiscarded;
        }

        let cursor = PaginationCursor::from_result(&result);

        if request.is_first_page() {
            state.items = result.items;
        } else {
            Self::append_deduplicated(&request.collection, &mut state.items, result.items);
        }

        state.cursor = cursor;
        state.phase = LoadPhase::Idle;
        state.last_synced = Some(Utc::now());

        debug!(
            collection = %request.collection,
            page = cursor.current_page,
            last_page = cursor.last_page,
            items = state.items.len(),
            "Committed page"
        );

        CommitOutcome::Applied
    }

    /// Records a fetch failure
    ///
    /// Moves the phase to `Failed(error)` and leaves items and cursor
    /// untouched: stale data over a blank screen. A failure belonging to
    /// a superseded request is discarded like a stale success, so it
    /// cannot clobber the phase of the request that replaced it.
    pub fn fail_load(&self, request: &PageRequest, error: FetchError) -> CommitOutcome {
        let mut entry = self.collections.entry(request.collection.clone()).or_default();
        let state = entry.value_mut();

        if state.filters.as_ref() != Some(&request.filters) {
            debug!(
                collection = %request.collection,
                page = request.page,
                "Discarding stale fetch failure (filters superseded)"
            );
            return CommitOutcome::StaleDiscarded;
        }

        warn!(
            collection = %request.collection,
            page = request.page,
            error = %error,
            "Fetch failed"
        );

        state.phase = LoadPhase::Failed(error);
        CommitOutcome::Applied
    }

    /// Clears a collection back to its initial state
    ///
    /// Items, cursor, phase, and the recorded filters are all reset.
    /// Used when the collection's underlying identity changes (e.g. the
    /// UI switches to a different sub-category listing under the same
    /// key).
    pub fn invalidate(&self, key: &CollectionKey) {
        if let Some(mut entry) = self.collections.get_mut(key) {
            let state = entry.value_mut();
            state.items.clear();
            state.cursor = PaginationCursor::initial();
            state.phase = LoadPhase::Idle;
            state.filters = None;
            state.last_synced = None;

            debug!(collection = %key, "Invalidated collection");
        }
    }

    /// Removes one item from the visible list
    ///
    /// Local mirror of a server-side delete. The cursor and the
    /// server-reported total are left alone; the next committed page
    /// reconciles them.
    ///
    /// Returns true if an item with the given id was present.
    pub fn remove_item(&self, key: &CollectionKey, id: &ItemId) -> bool {
        let Some(mut entry) = self.collections.get_mut(key) else {
            return false;
        };
        let state = entry.value_mut();

        let before = state.items.len();
        state.items.retain(|item| item.item_id() != *id);
        let removed = state.items.len() < before;

        if removed {
            debug!(collection = %key, item = %id, "Removed item from collection");
        }

        removed
    }

    /// Edits one visible item in place
    ///
    /// Local mirror of a server-side update; ordering is preserved.
    /// Returns true if an item with the given id was found.
    pub fn update_item(
        &self,
        key: &CollectionKey,
        id: &ItemId,
        f: impl FnOnce(&mut T),
    ) -> bool {
        let Some(mut entry) = self.collections.get_mut(key) else {
            return false;
        };
        let state = entry.value_mut();

        match state.items.iter_mut().find(|item| item.item_id() == *id) {
            Some(item) => {
                f(item);
                debug!(collection = %key, item = %id, "Updated item in collection");
                true
            }
            None => false,
        }
    }

    /// Appends a page of items, keeping the first occurrence of any
    /// duplicated id
    ///
    /// Append assumes distinct ids across pages; a duplicate is a data
    /// anomaly from the backend. Keeping the existing copy preserves
    /// stable list ordering for UI virtualization; the dropped copy is
    /// recovered by the next page-1 reset.
    fn append_deduplicated(key: &CollectionKey, items: &mut Vec<T>, incoming: Vec<T>) {
        let mut seen: HashSet<ItemId> = items.iter().map(RemoteItem::item_id).collect();

        for item in incoming {
            let id = item.item_id();
            if seen.contains(&id) {
                warn!(
                    collection = %key,
                    item = %id,
                    "Duplicate item id on append; keeping first occurrence"
                );
                continue;
            }
            seen.insert(id);
            items.push(item);
        }
    }
}

impl<T: RemoteItem> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit tests
// ============================================================================
