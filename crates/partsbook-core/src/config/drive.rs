//! Storage API client configuration.
//!
//! The API key and root folder id are injected here instead of living as
//! compiled-in literals, so deployments can rotate credentials and tests
//! can point the client at fakes.

use serde::{Deserialize, Serialize};

/// Google Drive listing client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// API credential passed as the `key` query parameter.
    #[serde(default)]
    pub api_key: String,
    /// Id of the top-level folder the library is rooted at.
    #[serde(default)]
    pub root_folder_id: String,
    /// Base URL of the listing API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum entries requested per page (clamped to 1..=1000).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Maximum recursion depth for folder flattening.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            root_folder_id: String::new(),
            base_url: default_base_url(),
            page_size: default_page_size(),
            max_depth: default_max_depth(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_page_size() -> u32 {
    1000
}

fn default_max_depth() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}
