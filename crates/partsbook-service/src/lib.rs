//! # partsbook-service
//!
//! The library service: decides between live fetches and cache reads
//! based on connectivity, writes successful fetches back into the cache,
//! and exposes download and name-filtering helpers on top.

pub mod filter;
pub mod library;

pub use library::{DataSource, LibraryService, Listing};
