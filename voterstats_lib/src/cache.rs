//! In-memory TTL cache of raw source bodies, keyed by URL.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Default revalidation window for source pages: one day.
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// Thread-safe body cache with time-to-live expiration.
///
/// Only raw page text is stored here; parsed snapshots are rebuilt on every
/// request. Expired entries are evicted lazily on the next `get` for that URL.
pub struct TextCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl TextCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached body for `url`, or `None` if missing or expired.
    pub fn get(&self, url: &str) -> Option<String> {
        let entry = self.store.get(url)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(url);
            return None;
        }
        Some(entry.body.clone())
    }

    /// Inserts or overwrites the body for `url`.
    pub fn insert(&self, url: String, body: String) {
        self.store.insert(
            url,
            CacheEntry {
                body,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Number of stored entries, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
