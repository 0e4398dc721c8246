//! # partsbook-net
//!
//! Connectivity monitoring. Platform integrations push
//! [`NetworkReport`]s into the [`ConnectivityMonitor`]; consumers read the
//! current state synchronously through a [`ConnectivityHandle`] or
//! subscribe to changes.

pub mod monitor;
pub mod probe;

pub use monitor::{ConnectivityHandle, ConnectivityMonitor, ConnectivityState, NetworkReport};
