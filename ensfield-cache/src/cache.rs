//! In-memory memoization of successful resolutions.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use ensfield_core::types::{Address, CacheKey};

/// Process-wide cache of resolved addresses.
///
/// Share one instance between every coordinator through an `Arc`. The map is
/// sharded, so readers and writers only contend on the same shard. Entries
/// never expire; the null address is never stored.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: DashMap<CacheKey, Address>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolutionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Looks up a resolved address.
    pub fn get(&self, key: &CacheKey) -> Option<Address> {
        let found = self.entries.get(key).map(|entry| *entry.value());

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        found
    }

    /// Stores a resolved address, replacing any previous value.
    ///
    /// The null address is refused: it means "unresolved", not a result.
    pub fn put(&self, key: CacheKey, address: Address) {
        if address.is_zero() {
            debug!(node = %key.node, network = %key.network, "Refusing to cache null address");
            return;
        }

        self.entries.insert(key, address);
    }

    /// Returns true if `key` has a cached value, without touching statistics.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cached resolutions
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that fell through
    pub misses: u64,
}
