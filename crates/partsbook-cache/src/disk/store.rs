//! Durable cache store: one JSON file per key.
//!
//! This is the store that survives restarts and feeds offline fallback.
//! Entries are never expired on read, since stale offline data beats no
//! data; growth is bounded by
//! [`prune_older_than`](DiskCacheStore::prune_older_than) instead.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use partsbook_core::error::{AppError, ErrorKind};
use partsbook_core::result::AppResult;
use partsbook_core::traits::cache::CacheStore;
use partsbook_core::types::Snapshot;

/// File extension for cache entries.
const ENTRY_EXT: &str = "json";

/// Durable file-per-key cache store.
#[derive(Debug, Clone)]
pub struct DiskCacheStore {
    /// Directory holding the entry files.
    root: PathBuf,
}

impl DiskCacheStore {
    /// Create or reuse a disk cache rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create cache root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Returns the root directory backing the cache.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the on-disk path for a cache key.
    ///
    /// Keys come from the builders in [`crate::keys`], so the alphabet is
    /// known; anything outside it is mapped to `-` to stay
    /// filesystem-safe.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{name}.{ENTRY_EXT}"))
    }
}

#[async_trait]
impl CacheStore for DiskCacheStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read cache entry {}", path.display()),
                err,
            )),
        }
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        // Write-then-rename keeps a concurrent reader from ever seeing a
        // half-written entry.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write cache entry {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to publish cache entry {}", path.display()),
                e,
            )
        })?;

        debug!(key, bytes = value.len(), "Wrote cache entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove cache entry {}", path.display()),
                err,
            )),
        }
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(fs::try_exists(self.path_for(key)).await.unwrap_or(false))
    }

    async fn prune_older_than(&self, max_age: chrono::Duration) -> AppResult<u64> {
        let cutoff = chrono::Utc::now() - max_age;
        let mut removed = 0u64;

        let mut dir = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to scan cache root {}", self.root.display()),
                e,
            )
        })?;

        while let Some(entry) = dir.next_entry().await.map_err(AppError::from)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXT) {
                continue;
            }

            let stale = match fs::read_to_string(&path).await {
                Ok(body) => match serde_json::from_str::<Snapshot<serde_json::Value>>(&body) {
                    Ok(snapshot) => snapshot.fetched_at < cutoff,
                    // Entries that no longer parse are dead weight.
                    Err(_) => true,
                },
                Err(_) => continue,
            };

            if stale && fs::remove_file(&path).await.is_ok() {
                debug!(path = %path.display(), "Pruned cache entry");
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    async fn make_store(dir: &tempfile::TempDir) -> DiskCacheStore {
        DiskCacheStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        store.put("partsbook:folders:top", "[1,2,3]").await.unwrap();
        let value = store.get("partsbook:folders:top").await.unwrap();
        assert_eq!(value, Some("[1,2,3]".to_string()));
    }

    #[tokio::test]
    async fn missing_entry_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;
        assert_eq!(store.get("partsbook:files:nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrite_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        store.put("k", "old").await.unwrap();
        store.put("k", "new").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("new".to_string()));
    }

    #[tokio::test]
    async fn removal_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        store.put("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn snapshot_json_round_trips_deep_equal() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        let snapshot = Snapshot::now(vec!["FolderA".to_string(), "FolderB".to_string()]);
        store.put_json("partsbook:folders:top", &snapshot).await.unwrap();

        let loaded: Option<Snapshot<Vec<String>>> =
            store.get_json("partsbook:folders:top").await.unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[tokio::test]
    async fn keys_with_namespace_separators_stay_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        store.put("partsbook:files:abc", "files").await.unwrap();
        store.put("partsbook:folders:top", "folders").await.unwrap();

        assert_eq!(
            store.get("partsbook:files:abc").await.unwrap(),
            Some("files".to_string())
        );
        assert_eq!(
            store.get("partsbook:folders:top").await.unwrap(),
            Some("folders".to_string())
        );
    }

    #[tokio::test]
    async fn prune_removes_only_entries_past_max_age() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        let fresh = Snapshot::now(serde_json::json!(["keep"]));
        let stale = Snapshot {
            value: serde_json::json!(["drop"]),
            fetched_at: Utc::now() - Duration::days(30),
        };
        store.put_json("fresh", &fresh).await.unwrap();
        store.put_json("stale", &stale).await.unwrap();

        let removed = store.prune_older_than(Duration::days(7)).await.unwrap();

        assert_eq!(removed, 1);
        assert!(store.contains("fresh").await.unwrap());
        assert!(!store.contains("stale").await.unwrap());
    }

    #[tokio::test]
    async fn prune_drops_unparseable_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir).await;

        store.put("broken", "not json at all").await.unwrap();
        let removed = store.prune_older_than(Duration::days(7)).await.unwrap();

        assert_eq!(removed, 1);
        assert!(!store.contains("broken").await.unwrap());
    }
}
