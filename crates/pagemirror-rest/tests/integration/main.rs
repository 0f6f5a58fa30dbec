//! Integration test entry point for the REST page fetcher
//!
//! Tests run against a wiremock-based mock backend; no network access.

mod common;
mod test_fetch_page;
