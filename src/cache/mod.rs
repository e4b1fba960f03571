//! In-memory cache for raw API responses
//!
//! This module provides a time-expiring response cache keyed by request URL.
//! Entries older than the configured interval are swept out by a background
//! reaper task, bounding memory to recently fetched responses. All access is
//! serialized through a single lock, so the cache is safe to share between
//! the command loop and the reaper.

mod store;

pub use store::Cache;
