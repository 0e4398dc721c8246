//! Connectivity monitor configuration.

use serde::{Deserialize, Serialize};

/// Connectivity monitor configuration.
///
/// The monitor assumes the device is online until the first platform
/// notification arrives. That optimistic default can cost one failed live
/// fetch, so `probe_on_start` optionally issues a single reachability probe
/// at construction to correct the state before first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// State assumed before the first notification or probe result.
    #[serde(default = "default_true")]
    pub assume_online: bool,
    /// Probe reachability once at monitor construction.
    #[serde(default)]
    pub probe_on_start: bool,
    /// Endpoint the startup probe requests. Expected to return 204.
    #[serde(default = "default_probe_url")]
    pub probe_url: String,
    /// Probe request timeout in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_seconds: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            assume_online: default_true(),
            probe_on_start: false,
            probe_url: default_probe_url(),
            probe_timeout_seconds: default_probe_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_probe_url() -> String {
    "https://www.gstatic.com/generate_204".to_string()
}

fn default_probe_timeout() -> u64 {
    5
}
