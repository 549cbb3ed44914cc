//! Detection result memoization.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::Domain;
use crate::normalize::UaHash;
use crate::record::ClientRecord;

/// Result cache keyed by content hash and identity domain.
///
/// Entries are pure memoization: identical keys always map to identical
/// records, so overwrites and eviction are both harmless and implementations
/// need no invalidation story.
pub trait ClientCache: Send + Sync {
    fn get(&self, key: &UaHash, domain: Domain) -> Option<ClientRecord>;
    fn put(&self, key: UaHash, domain: Domain, record: ClientRecord);
}

/// Default entry bound for [`LruClientCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// LRU map behind a mutex. The lock covers a single map operation, nothing
/// else, so contention stays bounded by hashing cost.
pub struct LruClientCache {
    entries: Mutex<LruCache<(UaHash, Domain), ClientRecord>>,
}

impl LruClientCache {
    /// A zero capacity is treated as one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        LruClientCache { entries: Mutex::new(LruCache::new(capacity)) }
    }
}

impl Default for LruClientCache {
    fn default() -> Self {
        LruClientCache::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ClientCache for LruClientCache {
    fn get(&self, key: &UaHash, domain: Domain) -> Option<ClientRecord> {
        self.entries.lock().get(&(*key, domain)).cloned()
    }

    fn put(&self, key: UaHash, domain: Domain, record: ClientRecord) {
        self.entries.lock().put((key, domain), record);
    }
}

/// Cache that remembers nothing, for callers that memoize elsewhere.
pub struct NullCache;

impl ClientCache for NullCache {
    fn get(&self, _key: &UaHash, _domain: Domain) -> Option<ClientRecord> {
        None
    }

    fn put(&self, _key: UaHash, _domain: Domain, _record: ClientRecord) {}
}
