//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IPageFetcher`] - One asynchronous call fetching one page of a
//!   remote collection (implemented by the REST adapter, mocked in tests)

pub mod page_fetcher;

pub use page_fetcher::{IPageFetcher, RemoteItem};
