//! Domain error types
//!
//! This module defines error types specific to domain operations
//! (validation failures at construction time) and the fetch error
//! taxonomy reported by remote page fetcher adapters.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid collection key format or content
    #[error("Invalid collection key: {0}")]
    InvalidCollectionKey(String),

    /// Invalid page number (pages are 1-based)
    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    /// A page result violated its internal invariants
    #[error("Inconsistent page result: {0}")]
    InconsistentPageResult(String),
}

/// Errors reported by a remote page fetcher
///
/// This is the complete error taxonomy the store layer distinguishes.
/// All variants are handled identically by the orchestrator (recorded in
/// the collection's load phase, never retried automatically); the split
/// exists so callers can render the right affordance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response was received (unreachable host, timeout, DNS failure)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server rejected request ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message, taken from the response body when available
        message: String,
    },

    /// The response body could not be decoded into a page result
    #[error("Malformed page payload: {0}")]
    Payload(String),
}

impl FetchError {
    /// Returns true if this error came back from the server rather than
    /// the transport or the decoder
    pub fn is_server_rejection(&self) -> bool {
        matches!(self, FetchError::Server { .. })
    }
}
