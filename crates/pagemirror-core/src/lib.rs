//! Pagemirror Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - `CollectionKey`, `Filters`, `PageRequest`, `PageResult`,
//!   `PaginationCursor`, `CollectionState`
//! - **Port definitions** - Traits for adapters: `IPageFetcher`
//! - **State machine** - Collection load phases (`Idle`/`Loading`/`Failed`)
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure data types and merge rules with no I/O.
//! Ports define trait interfaces that adapter crates implement; the store
//! crate drives them.

pub mod config;
pub mod domain;
pub mod ports;
