//! Timestamped cache snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached value together with the time it was fetched.
///
/// Snapshots are what the cache layer persists: the timestamp powers the
/// disk provider's age-based pruning and lets consumers report how stale
/// offline data is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// The cached value.
    pub value: T,
    /// When the value was successfully fetched.
    pub fetched_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Wrap a freshly fetched value with the current timestamp.
    pub fn now(value: T) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    /// Age of the snapshot relative to the current time.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = Snapshot::now(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
