//! # partsbook-drive
//!
//! Storage API client crate: the paginated listing client, the page
//! aggregator, the recursive tree fetcher, and file download.

pub mod client;
pub mod download;
pub mod pages;
pub mod tree;

pub use client::DriveClient;
pub use download::Downloader;
pub use pages::list_all;
pub use tree::TreeFetcher;
