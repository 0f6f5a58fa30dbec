//! Per-collection state
//!
//! `CollectionState` is the authoritative client-side view of one
//! paginated collection: the visible items, the pagination cursor, the
//! load phase, and the most recently recorded filters. The store crate
//! owns all instances and is the only writer.

use chrono::{DateTime, Utc};

use super::cursor::PaginationCursor;
use super::errors::FetchError;
use super::filters::Filters;

/// Load phase of a collection
///
/// An explicit three-state machine instead of a `loading` flag plus an
/// error slot. `Failed` is the error-carrying sub-state of idle: the
/// collection is not loading, and the last fetch ended in this error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch in flight; last fetch (if any) succeeded
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// No fetch in flight; the last fetch failed
    Failed(FetchError),
}

impl LoadPhase {
    /// True while a fetch is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// The last fetch error, if the collection is in the failed phase
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Client-side mirror of one server-paginated collection
///
/// Created lazily on the first fetch request for a key and retained for
/// the process lifetime. `filters` holds the most recently *recorded*
/// filter set — recorded when a first-page request is issued, not when
/// its response lands — which is what makes stale-response detection
/// last-requester-wins rather than last-responder-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionState<T> {
    /// Visible items, in accumulated server order
    pub items: Vec<T>,
    /// Current load phase
    pub phase: LoadPhase,
    /// Pagination position derived from the last accepted page
    pub cursor: PaginationCursor,
    /// Most recently recorded filters (None before the first request)
    pub filters: Option<Filters>,
    /// When the last page result was accepted
    pub last_synced: Option<DateTime<Utc>>,
}

impl<T> CollectionState<T> {
    /// Empty idle state, used for keys that have never been fetched
    #[must_use]
    pub fn idle() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            cursor: PaginationCursor::initial(),
            filters: None,
            last_synced: None,
        }
    }

    /// True while a fetch is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// The last fetch error, if any
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.phase.error()
    }

    /// Whether a later page exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.has_next
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::idle()
    }
}
