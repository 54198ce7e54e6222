//! Result caching for pure functions

pub mod config;

pub use config::CacheConfig;

use crate::model::Value;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of cache activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to evaluate the function
    pub misses: u64,
    /// Entries currently held
    pub size: usize,
}

impl CacheStats {
    /// Get cache hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe LRU cache of function results
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct FunctionResultCache {
    cache: Option<Arc<Mutex<LruCache<String, Value>>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl std::fmt::Debug for FunctionResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionResultCache")
            .field("enabled", &self.is_enabled())
            .field("stats", &self.stats())
            .finish()
    }
}

impl FunctionResultCache {
    /// Create a new function result cache
    pub fn new(config: &CacheConfig) -> Self {
        let cache = NonZeroUsize::new(config.result_cache_size)
            .filter(|_| config.enable_result_caching)
            .map(|capacity| Arc::new(Mutex::new(LruCache::new(capacity))));

        Self {
            cache,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Whether this cache stores anything
    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Get a cached function result
    pub fn get(&self, key: &str) -> Option<Value> {
        let cache = self.cache.as_ref()?;
        match cache.lock().get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert a function result into the cache
    pub fn insert(&self, key: String, value: Value) {
        if let Some(cache) = &self.cache {
            cache.lock().put(key, value);
        }
    }

    /// Drop all entries and reset the counters
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.cache.as_ref().map_or(0, |cache| cache.lock().len()),
        }
    }
}

/// Build the cache key for a call, or `None` if the arguments cannot be encoded
pub fn generate_result_cache_key(function_name: &str, args: &[Value]) -> Option<String> {
    let encoded = serde_json::to_string(args).ok()?;
    Some(format!("{function_name}:{encoded}"))
}
