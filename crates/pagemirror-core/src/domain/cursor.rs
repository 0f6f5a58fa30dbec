//! Pagination cursor
//!
//! Pure bookkeeping derived from the most recently accepted page result
//! for a collection. The cursor decides what the next fetch should be;
//! it never performs one.

use super::filters::Filters;
use super::newtypes::CollectionKey;
use super::page::{PageRequest, PageResult};

/// Pagination position for one collection
///
/// Derived deterministically from the latest accepted `PageResult`:
/// `has_next = current_page < last_page`. Before any page has been
/// accepted the cursor is in its [`initial`](PaginationCursor::initial)
/// state with `current_page == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    /// 1-based index of the last accepted page (0 before any fetch)
    pub current_page: u32,
    /// 1-based index of the last page the server reported
    pub last_page: u32,
    /// Whether a later page exists
    pub has_next: bool,
}

impl PaginationCursor {
    /// Cursor state before any page has been fetched
    #[must_use]
    pub fn initial() -> Self {
        Self {
            current_page: 0,
            last_page: 0,
            has_next: false,
        }
    }

    /// Derive a cursor from an accepted page result
    #[must_use]
    pub fn from_result<T>(result: &PageResult<T>) -> Self {
        Self {
            current_page: result.current_page,
            last_page: result.last_page,
            has_next: result.current_page < result.last_page,
        }
    }

    /// Request for the page after the current one, if any
    ///
    /// Returns `None` when the collection is exhausted; never produces a
    /// request beyond `last_page`.
    #[must_use]
    pub fn next_page_request(
        &self,
        collection: CollectionKey,
        filters: Filters,
    ) -> Option<PageRequest> {
        if !self.has_next {
            return None;
        }

        // current_page < last_page here, so current_page + 1 is in range
        // and nonzero.
        Some(PageRequest {
            collection,
            page: self.current_page + 1,
            filters,
        })
    }

    /// Request for page 1, regardless of cursor state
    ///
    /// Used for initial load, pull-to-refresh, and filter changes.
    #[must_use]
    pub fn first_page_request(collection: CollectionKey, filters: Filters) -> PageRequest {
        PageRequest {
            collection,
            page: 1,
            filters,
        }
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::initial()
    }
}
