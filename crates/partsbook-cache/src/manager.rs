//! Cache manager that dispatches to the configured store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use partsbook_core::config::cache::CacheConfig;
use partsbook_core::error::AppError;
use partsbook_core::result::AppResult;
use partsbook_core::traits::cache::CacheStore;
use partsbook_core::types::Snapshot;

/// Cache manager that wraps the configured cache store.
///
/// The store is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// The inner cache store.
    inner: Arc<dyn CacheStore>,
}

impl CacheManager {
    /// Create a new cache manager from configuration.
    pub async fn new(config: &CacheConfig) -> AppResult<Self> {
        let inner: Arc<dyn CacheStore> = match config.provider.as_str() {
            #[cfg(feature = "disk")]
            "disk" => {
                info!("Initializing disk cache store");
                let store = crate::disk::DiskCacheStore::new(&config.disk.root_path).await?;
                Arc::new(store)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory cache store");
                let store = crate::memory::MemoryCacheStore::new(&config.memory);
                Arc::new(store)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown cache provider: '{other}'. Supported: disk, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a cache manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn CacheStore>) -> Self {
        Self { inner: store }
    }

    /// Persist a snapshot under `key`, best-effort.
    ///
    /// A failed persist must never fail the fetch that produced the data,
    /// so the error is logged and swallowed here.
    pub async fn save_snapshot<T>(&self, key: &str, value: &T)
    where
        T: serde::Serialize + Send + Sync,
    {
        let snapshot = Snapshot {
            value,
            fetched_at: chrono::Utc::now(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Err(e) = self.inner.put(key, &json).await {
                    tracing::warn!(key, error = %e, "Failed to persist cache snapshot");
                }
            }
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize cache snapshot"),
        }
    }

    /// Load the last snapshot stored under `key`.
    ///
    /// Absent, unreadable, and corrupt entries all come back as `None`:
    /// the caller only cares whether usable offline data exists.
    pub async fn load_snapshot<T>(&self, key: &str) -> Option<Snapshot<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let raw = match self.inner.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(key, error = %e, "Cache read failed; treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!(key, error = %e, "Cache entry corrupt; treating as absent");
                None
            }
        }
    }
}

#[async_trait]
impl CacheStore for CacheManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.put(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        self.inner.contains(key).await
    }

    async fn prune_older_than(&self, max_age: chrono::Duration) -> AppResult<u64> {
        self.inner.prune_older_than(max_age).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_provider_is_a_configuration_error() {
        let config = CacheConfig {
            provider: "redis".to_string(),
            ..CacheConfig::default()
        };
        let err = CacheManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, partsbook_core::error::ErrorKind::Configuration);
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn snapshot_save_load_round_trip() {
        let config = CacheConfig {
            provider: "memory".to_string(),
            ..CacheConfig::default()
        };
        let manager = CacheManager::new(&config).await.unwrap();

        manager
            .save_snapshot("k", &vec!["a".to_string(), "b".to_string()])
            .await;
        let loaded = manager.load_snapshot::<Vec<String>>("k").await.unwrap();
        assert_eq!(loaded.value, vec!["a".to_string(), "b".to_string()]);
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn corrupt_snapshot_loads_as_absent() {
        let config = CacheConfig {
            provider: "memory".to_string(),
            ..CacheConfig::default()
        };
        let manager = CacheManager::new(&config).await.unwrap();

        manager.put("k", "{ this is not json").await.unwrap();
        assert!(manager.load_snapshot::<Vec<String>>("k").await.is_none());
    }
}
