//! Startup reachability probe.
//!
//! The monitor's optimistic initial state can cost one failed live fetch
//! before the first platform notification arrives. When
//! `probe_on_start` is set, a single request against a 204 endpoint
//! settles the question up front.

use tracing::debug;

use partsbook_core::config::connectivity::ConnectivityConfig;

use crate::monitor::{ConnectivityMonitor, ConnectivityState};

/// Check whether the configured probe endpoint is reachable.
pub async fn check(config: &ConnectivityConfig) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.probe_timeout_seconds))
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };

    match client.get(&config.probe_url).send().await {
        Ok(response) => {
            let reachable = response.status().is_success();
            debug!(url = %config.probe_url, status = %response.status(), "Probe completed");
            reachable
        }
        Err(e) => {
            debug!(url = %config.probe_url, error = %e, "Probe failed");
            false
        }
    }
}

/// Build a monitor per configuration, running the startup probe when
/// enabled.
pub async fn monitor_with_probe(config: &ConnectivityConfig) -> ConnectivityMonitor {
    let monitor = ConnectivityMonitor::new(config);
    if config.probe_on_start {
        let state = if check(config).await {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        };
        monitor.set_state(state);
    }
    monitor
}
