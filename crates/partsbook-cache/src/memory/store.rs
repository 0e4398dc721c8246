//! In-memory cache implementation using the moka crate.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use partsbook_core::config::cache::MemoryCacheConfig;
use partsbook_core::result::AppResult;
use partsbook_core::traits::cache::CacheStore;

/// In-memory cache store using moka.
///
/// Entries expire through moka's cache-level TTL, so this store has
/// nothing to prune explicitly.
#[derive(Debug, Clone)]
pub struct MemoryCacheStore {
    /// The underlying moka cache.
    cache: Cache<String, String>,
}

impl MemoryCacheStore {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();

        Self { cache }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await)
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }
}
