//! Page request and result types
//!
//! A `PageRequest` identifies one fetch against a paginated backend list;
//! a `PageResult` is the decoded response. Both validate their invariants
//! at construction time so the store layer can rely on them.

use super::errors::DomainError;
use super::filters::Filters;
use super::newtypes::CollectionKey;

/// A request for one page of a logical collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Which collection is being fetched
    pub collection: CollectionKey,
    /// 1-based page number
    pub page: u32,
    /// Query parameters scoping this fetch
    pub filters: Filters,
}

impl PageRequest {
    /// Create a new PageRequest
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPage` if `page` is zero (pages are
    /// 1-based, matching the backend paginator)
    pub fn new(
        collection: CollectionKey,
        page: u32,
        filters: Filters,
    ) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPage(
                "Page numbers are 1-based".to_string(),
            ));
        }

        Ok(Self {
            collection,
            page,
            filters,
        })
    }

    /// True if this request targets the first page (reset semantics)
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// One decoded page of a paginated server list
///
/// `total` is the server-reported count of the whole collection; it is
/// never recomputed client-side and may drift from the sum of fetched
/// pages while the remote list is changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// 1-based index of this page
    pub current_page: u32,
    /// 1-based index of the last page
    pub last_page: u32,
    /// Server-reported total item count across all pages
    pub total: u64,
    /// Server page size; `items.len() <= per_page` for every page
    pub per_page: u32,
}

impl<T> PageResult<T> {
    /// Create a new PageResult, validating pagination invariants
    ///
    /// # Errors
    /// Returns `DomainError::InconsistentPageResult` when:
    /// - `current_page` is zero
    /// - `current_page > last_page`
    /// - the page holds more items than `per_page` allows (skipped when
    ///   the server did not report a page size)
    pub fn new(
        items: Vec<T>,
        current_page: u32,
        last_page: u32,
        total: u64,
        per_page: u32,
    ) -> Result<Self, DomainError> {
        if current_page == 0 {
            return Err(DomainError::InconsistentPageResult(
                "current_page must be 1-based".to_string(),
            ));
        }

        if current_page > last_page {
            return Err(DomainError::InconsistentPageResult(format!(
                "current_page {current_page} exceeds last_page {last_page}"
            )));
        }

        if per_page > 0 && items.len() > per_page as usize {
            return Err(DomainError::InconsistentPageResult(format!(
                "page holds {} items but per_page is {per_page}",
                items.len()
            )));
        }

        Ok(Self {
            items,
            current_page,
            last_page,
            total,
            per_page,
        })
    }

    /// True when a later page exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> CollectionKey {
        CollectionKey::new(s).unwrap()
    }

    #[test]
    fn test_page_request_first_page() {
        let req = PageRequest::new(key("news"), 1, Filters::new()).unwrap();
        assert!(req.is_first_page());

        let req = PageRequest::new(key("news"), 2, Filters::new()).unwrap();
        assert!(!req.is_first_page());
    }

    #[test]
    fn test_page_request_zero_fails() {
        let result = PageRequest::new(key("news"), 0, Filters::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_page_result_valid() {
        let result = PageResult::new(vec![1, 2], 1, 3, 25, 2).unwrap();
        assert!(result.has_next());
        assert_eq!(result.total, 25);
    }

    #[test]
    fn test_page_result_final_page_has_no_next() {
        let result = PageResult::new(vec![9], 3, 3, 25, 2).unwrap();
        assert!(!result.has_next());
    }

    #[test]
    fn test_page_result_current_beyond_last_fails() {
        let result = PageResult::new(vec![1], 4, 3, 25, 2);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_result_zero_current_fails() {
        let result: Result<PageResult<i32>, _> = PageResult::new(vec![], 0, 1, 0, 10);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_result_overfull_fails() {
        let result = PageResult::new(vec![1, 2, 3], 1, 1, 3, 2);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_result_unknown_per_page_skips_len_check() {
        // Some endpoints omit per_page; the length bound cannot be checked
        let result = PageResult::new(vec![1, 2, 3], 1, 1, 3, 0);
        assert!(result.is_ok());
    }
}
