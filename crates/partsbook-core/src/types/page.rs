//! One page of a paginated folder listing.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// One page of entries plus an optional continuation token.
///
/// Invariant: if `next_token` is present the storage API holds at least one
/// more page for the same folder. Aggregation code must still guard against
/// a malformed empty page that carries a token (see `list_all`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Entries in the storage API's order.
    pub entries: Vec<Entry>,
    /// Opaque cursor for the next page, if any.
    pub next_token: Option<String>,
}

impl Page {
    /// A page with no entries and no continuation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the page carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
