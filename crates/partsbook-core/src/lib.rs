//! # partsbook-core
//!
//! Core crate for Partsbook. Contains traits, configuration schemas,
//! domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Partsbook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
