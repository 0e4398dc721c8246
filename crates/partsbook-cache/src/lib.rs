//! # partsbook-cache
//!
//! Cache store implementations for Partsbook. Supports two modes:
//!
//! - **disk**: One JSON file per key, durable across sessions; this is the
//!   store offline fallback reads from
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//!
//! The store is selected at runtime based on configuration.

pub mod keys;
pub mod manager;

#[cfg(feature = "disk")]
pub mod disk;
#[cfg(feature = "memory")]
pub mod memory;

pub use manager::CacheManager;
