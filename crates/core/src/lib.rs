// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! evcache-core: Staged event delivery
//!
//! This crate provides:
//! - An event cache that holds events back until a unit of work commits
//! - The dispatcher capability committed events are fired on
//! - Configuration for how the cache retains storage between rounds

pub mod config;
pub mod events;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-exports
pub use config::{CacheConfig, ConfigError};
pub use events::{DispatchError, EventCache, EventRecord, Fireable, FlushError};
