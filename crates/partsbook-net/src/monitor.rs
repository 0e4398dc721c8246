//! Connectivity state tracking.

use tokio::sync::watch;
use tracing::info;

use partsbook_core::config::connectivity::ConnectivityConfig;

/// One notification from the platform's network stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkReport {
    /// A network interface is up.
    pub connected: bool,
    /// The internet is actually reachable over that interface.
    pub internet_reachable: bool,
}

impl NetworkReport {
    /// Online requires both conditions; a captive portal or dead uplink
    /// reports `connected` without reachability.
    pub fn is_online(&self) -> bool {
        self.connected && self.internet_reachable
    }
}

/// Current connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// Interface up and internet reachable.
    Online,
    /// Anything less.
    Offline,
}

impl ConnectivityState {
    /// True for [`ConnectivityState::Online`].
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// Receives platform network notifications and publishes the current
/// online/offline state over a watch channel.
///
/// State changes are pushed to subscribers; consumers never poll the
/// platform. The initial state is taken from configuration
/// (`assume_online`, optimistic by default) until the first notification
/// or startup probe corrects it.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    tx: watch::Sender<ConnectivityState>,
}

impl ConnectivityMonitor {
    /// Create a monitor with the configured initial state.
    pub fn new(config: &ConnectivityConfig) -> Self {
        let initial = if config.assume_online {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        };
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Ingest one platform notification.
    pub fn report(&self, report: NetworkReport) {
        let state = if report.is_online() {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        };
        let previous = self.tx.send_replace(state);
        if previous != state {
            info!(?previous, current = ?state, "Connectivity changed");
        }
    }

    /// Force a state directly, bypassing the report rules. Used by the
    /// startup probe and by explicit offline modes.
    pub fn set_state(&self, state: ConnectivityState) {
        let previous = self.tx.send_replace(state);
        if previous != state {
            info!(?previous, current = ?state, "Connectivity changed");
        }
    }

    /// The current state.
    pub fn state(&self) -> ConnectivityState {
        *self.tx.borrow()
    }

    /// A cheap, cloneable consumer-side handle.
    pub fn handle(&self) -> ConnectivityHandle {
        ConnectivityHandle {
            rx: self.tx.subscribe(),
        }
    }
}

/// Consumer-side view of the connectivity state.
#[derive(Debug, Clone)]
pub struct ConnectivityHandle {
    rx: watch::Receiver<ConnectivityState>,
}

impl ConnectivityHandle {
    /// Synchronous read of the current state.
    pub fn is_online(&self) -> bool {
        self.rx.borrow().is_online()
    }

    /// A receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_config() -> ConnectivityConfig {
        ConnectivityConfig::default()
    }

    #[test]
    fn initial_state_is_optimistic_by_default() {
        let monitor = ConnectivityMonitor::new(&online_config());
        assert!(monitor.handle().is_online());
    }

    #[test]
    fn initial_state_honors_assume_online_false() {
        let config = ConnectivityConfig {
            assume_online: false,
            ..online_config()
        };
        let monitor = ConnectivityMonitor::new(&config);
        assert!(!monitor.handle().is_online());
    }

    #[test]
    fn online_requires_both_conditions() {
        let monitor = ConnectivityMonitor::new(&online_config());

        monitor.report(NetworkReport {
            connected: true,
            internet_reachable: false,
        });
        assert!(!monitor.handle().is_online());

        monitor.report(NetworkReport {
            connected: true,
            internet_reachable: true,
        });
        assert!(monitor.handle().is_online());
    }

    #[tokio::test]
    async fn subscribers_are_notified_of_changes() {
        let monitor = ConnectivityMonitor::new(&online_config());
        let mut rx = monitor.handle().subscribe();

        monitor.report(NetworkReport {
            connected: false,
            internet_reachable: false,
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ConnectivityState::Offline);
    }

    #[test]
    fn handle_reads_do_not_consume_notifications() {
        let monitor = ConnectivityMonitor::new(&online_config());
        let handle = monitor.handle();

        monitor.report(NetworkReport {
            connected: false,
            internet_reachable: false,
        });

        assert!(!handle.is_online());
        assert!(!handle.is_online());
    }
}
