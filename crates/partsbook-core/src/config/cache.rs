//! Cache provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache provider type: `"memory"` or `"disk"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// In-memory cache configuration.
    #[serde(default)]
    pub memory: MemoryCacheConfig,
    /// On-disk cache configuration.
    #[serde(default)]
    pub disk: DiskCacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            memory: MemoryCacheConfig::default(),
            disk: DiskCacheConfig::default(),
        }
    }
}

/// In-memory cache backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries in the cache.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// TTL for in-memory entries in seconds.
    #[serde(default = "default_memory_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_memory_ttl(),
        }
    }
}

/// On-disk cache backend configuration.
///
/// Disk entries never expire on read; offline fallback prefers stale data
/// over nothing. Growth is bounded by explicit pruning instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskCacheConfig {
    /// Directory holding one JSON file per cache key.
    #[serde(default = "default_disk_root")]
    pub root_path: String,
}

impl Default for DiskCacheConfig {
    fn default() -> Self {
        Self {
            root_path: default_disk_root(),
        }
    }
}

fn default_provider() -> String {
    "disk".to_string()
}

fn default_max_capacity() -> u64 {
    1024
}

fn default_memory_ttl() -> u64 {
    300
}

fn default_disk_root() -> String {
    "data/cache".to_string()
}
