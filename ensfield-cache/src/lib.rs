//! Resolution cache for ensfield.
//!
//! Shared memoization of `(node, network) → address`, safe for concurrent use.

mod cache;

pub use cache::{CacheStats, ResolutionCache};
