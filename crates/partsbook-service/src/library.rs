//! The library service: live fetch, cache write-back, offline fallback.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use partsbook_cache::CacheManager;
use partsbook_cache::keys;
use partsbook_core::config::AppConfig;
use partsbook_core::error::{AppError, ErrorKind};
use partsbook_core::result::AppResult;
use partsbook_core::traits::lister::FolderLister;
use partsbook_core::types::{Entry, FlatFile};
use partsbook_drive::{DriveClient, Downloader, TreeFetcher, list_all};
use partsbook_net::monitor::{ConnectivityHandle, ConnectivityMonitor};
use partsbook_net::probe;

/// Where the data in a [`Listing`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the storage API just now.
    Live,
    /// Read from the last persisted snapshot.
    Cache {
        /// When the snapshot was originally fetched.
        fetched_at: DateTime<Utc>,
    },
}

/// A listing plus its provenance, so consumers can tell fresh data from
/// an offline snapshot instead of guessing from an empty list.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    /// The listed items.
    pub items: Vec<T>,
    /// Fresh or cached.
    pub source: DataSource,
}

/// Orchestrates the listing client, tree fetcher, cache, and
/// connectivity monitor behind the operations the UI needs.
#[derive(Debug, Clone)]
pub struct LibraryService {
    lister: Arc<dyn FolderLister>,
    tree: TreeFetcher,
    downloader: Downloader,
    cache: CacheManager,
    connectivity: ConnectivityHandle,
    root_folder_id: String,
}

impl LibraryService {
    /// Assemble a service from pre-built parts. Tests inject fakes here.
    pub fn new(
        lister: Arc<dyn FolderLister>,
        downloader: Downloader,
        cache: CacheManager,
        connectivity: ConnectivityHandle,
        root_folder_id: impl Into<String>,
        max_depth: u32,
    ) -> Self {
        Self {
            tree: TreeFetcher::new(lister.clone(), max_depth),
            lister,
            downloader,
            cache,
            connectivity,
            root_folder_id: root_folder_id.into(),
        }
    }

    /// Wire the production service from configuration.
    ///
    /// Returns the monitor alongside the service so the caller can keep
    /// feeding platform notifications into it.
    pub async fn build(config: &AppConfig) -> AppResult<(Self, ConnectivityMonitor)> {
        if config.drive.root_folder_id.is_empty() {
            return Err(AppError::configuration("drive.root_folder_id must be set"));
        }

        let client = Arc::new(DriveClient::new(config.drive.clone())?);
        let downloader = Downloader::new(&config.drive)?;
        let cache = CacheManager::new(&config.cache).await?;
        let monitor = probe::monitor_with_probe(&config.connectivity).await;

        let service = Self::new(
            client,
            downloader,
            cache,
            monitor.handle(),
            config.drive.root_folder_id.clone(),
            config.drive.max_depth,
        );
        Ok((service, monitor))
    }

    /// List the top-level folders of the library.
    ///
    /// Online, the folder entries are fetched live, sorted by name, and
    /// written back to the cache; offline (or when the live fetch fails),
    /// the last snapshot is served instead.
    pub async fn top_folders(&self) -> AppResult<Listing<Entry>> {
        let key = keys::top_folders();

        if !self.connectivity.is_online() {
            return self.listing_from_cache(&key).await;
        }

        match self.fetch_top_live().await {
            Ok(folders) => {
                self.cache.save_snapshot(&key, &folders).await;
                Ok(Listing {
                    items: folders,
                    source: DataSource::Live,
                })
            }
            Err(e) => self.fall_back_to_cache(&key, e).await,
        }
    }

    /// Recursively flatten one folder into its file list.
    ///
    /// Same live/cache selection as [`top_folders`](Self::top_folders);
    /// the flattened list is cached per folder id.
    pub async fn folder_files(&self, folder_id: &str) -> AppResult<Listing<FlatFile>> {
        // Never-cancelled traversal.
        let (_tx, cancel) = watch::channel(false);
        self.folder_files_with_cancel(folder_id, cancel).await
    }

    /// Like [`folder_files`](Self::folder_files) with a cancellation
    /// signal threaded through the traversal. Cancellation propagates to
    /// the caller; it never falls back to the cache.
    pub async fn folder_files_with_cancel(
        &self,
        folder_id: &str,
        cancel: watch::Receiver<bool>,
    ) -> AppResult<Listing<FlatFile>> {
        let key = keys::folder_files(folder_id);

        if !self.connectivity.is_online() {
            return self.listing_from_cache(&key).await;
        }

        match self.tree.flatten_with_cancel(folder_id, cancel).await {
            Ok(files) => {
                self.cache.save_snapshot(&key, &files).await;
                Ok(Listing {
                    items: files,
                    source: DataSource::Live,
                })
            }
            Err(e) if e.kind == ErrorKind::Cancelled => Err(e),
            Err(e) => self.fall_back_to_cache(&key, e).await,
        }
    }

    /// Download a file's raw bytes. Requires connectivity.
    pub async fn download(&self, file: &FlatFile) -> AppResult<Bytes> {
        if !self.connectivity.is_online() {
            return Err(AppError::offline(format!(
                "Cannot download '{}' while offline",
                file.name
            )));
        }
        self.downloader.fetch(file).await
    }

    /// Download a file base64-encoded, the form viewer components take.
    pub async fn download_base64(&self, file: &FlatFile) -> AppResult<String> {
        if !self.connectivity.is_online() {
            return Err(AppError::offline(format!(
                "Cannot download '{}' while offline",
                file.name
            )));
        }
        self.downloader.fetch_base64(file).await
    }

    /// Remove cached snapshots older than `max_age`.
    pub async fn prune_cache(&self, max_age: chrono::Duration) -> AppResult<u64> {
        use partsbook_core::traits::cache::CacheStore as _;
        self.cache.prune_older_than(max_age).await
    }

    /// Live fetch of the top level: immediate children of the root
    /// folder, reduced to folder entries, sorted by display name.
    async fn fetch_top_live(&self) -> AppResult<Vec<Entry>> {
        let entries = list_all(self.lister.as_ref(), &self.root_folder_id).await?;

        let mut folders: Vec<Entry> = entries.into_iter().filter(Entry::is_folder).collect();
        folders.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(folders)
    }

    /// Serve a listing purely from the cache (the offline path).
    async fn listing_from_cache<T>(&self, key: &str) -> AppResult<Listing<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.cache.load_snapshot::<Vec<T>>(key).await {
            Some(snapshot) => {
                info!(key, fetched_at = %snapshot.fetched_at, "Serving cached listing while offline");
                Ok(Listing {
                    items: snapshot.value,
                    source: DataSource::Cache {
                        fetched_at: snapshot.fetched_at,
                    },
                })
            }
            None => Err(AppError::offline("No offline data available")),
        }
    }

    /// A live fetch failed while online: prefer the last snapshot over
    /// surfacing the failure, and only propagate when there is none.
    async fn fall_back_to_cache<T>(&self, key: &str, error: AppError) -> AppResult<Listing<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        warn!(key, error = %error, "Live fetch failed; trying cached snapshot");
        match self.cache.load_snapshot::<Vec<T>>(key).await {
            Some(snapshot) => Ok(Listing {
                items: snapshot.value,
                source: DataSource::Cache {
                    fetched_at: snapshot.fetched_at,
                },
            }),
            None => Err(error),
        }
    }
}
