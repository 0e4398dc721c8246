//! Cache store trait for pluggable caching backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for cache backends (in-memory or on-disk).
///
/// All values are serialized as strings (JSON). The store is responsible
/// for durability and expiry; key construction lives in
/// `partsbook-cache::keys` so every key the application uses is in one
/// place.
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist, has
    /// expired, or the stored value is unreadable.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value under a key, overwriting any prior value.
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key. Deleting an absent key is a no-op.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check whether a key currently exists.
    async fn contains(&self, key: &str) -> AppResult<bool>;

    /// Remove entries older than `max_age`, returning how many were
    /// deleted. Stores that expire entries on their own return 0.
    async fn prune_older_than(&self, max_age: chrono::Duration) -> AppResult<u64> {
        let _ = max_age;
        Ok(0)
    }

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Store a typed value by serializing to JSON.
    async fn put_json<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.put(key, &json).await
    }
}
