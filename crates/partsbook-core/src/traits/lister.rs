//! Folder listing trait for the storage API client.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::Page;

/// Trait for listing the immediate children of a folder, one page at a time.
///
/// The HTTP client in `partsbook-drive` is the production implementation;
/// tests inject in-memory fakes. Failures surface as typed errors rather
/// than empty pages so that callers can distinguish an empty folder from a
/// broken request.
#[async_trait]
pub trait FolderLister: Send + Sync + std::fmt::Debug + 'static {
    /// List one page of children of `folder_id`.
    ///
    /// `page_token` continues a previous listing; pass `None` for the first
    /// page. `folder_id` must be a non-empty opaque identifier previously
    /// obtained from the storage API.
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> AppResult<Page>;
}
