//! Domain types shared across Partsbook crates.

pub mod entry;
pub mod page;
pub mod snapshot;

pub use entry::{Entry, EntryKind, FlatFile};
pub use page::Page;
pub use snapshot::Snapshot;
