//! Recursive folder flattening.
//!
//! Collapses a folder tree into one ordered list of file leaves: pre-order
//! traversal, a folder's own files before any sub-folder descent, siblings
//! visited strictly sequentially so at most one listing request is in
//! flight at a time.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::watch;
use tracing::{debug, warn};

use partsbook_core::error::{AppError, ErrorKind};
use partsbook_core::result::AppResult;
use partsbook_core::traits::lister::FolderLister;
use partsbook_core::types::FlatFile;

use crate::pages::list_all;

/// Flattens nested folders into a single file list, up to a bounded depth.
#[derive(Debug, Clone)]
pub struct TreeFetcher {
    /// Listing backend.
    lister: Arc<dyn FolderLister>,
    /// Maximum recursion depth; sub-folders at the bound are skipped.
    max_depth: u32,
}

impl TreeFetcher {
    /// Create a new tree fetcher.
    pub fn new(lister: Arc<dyn FolderLister>, max_depth: u32) -> Self {
        Self { lister, max_depth }
    }

    /// Flatten `folder_id` and everything beneath it into one file list.
    ///
    /// A failure listing `folder_id` itself propagates as `Err`; a failing
    /// sub-folder contributes an empty list and a logged warning while its
    /// siblings still complete.
    pub async fn flatten(&self, folder_id: &str) -> AppResult<Vec<FlatFile>> {
        // Receiver that never observes a cancellation.
        let (_tx, cancel) = watch::channel(false);
        self.flatten_at(folder_id.to_string(), 0, cancel).await
    }

    /// Like [`flatten`](Self::flatten), but stops at the next folder
    /// boundary once `cancel` holds `true`, returning
    /// [`ErrorKind::Cancelled`].
    pub async fn flatten_with_cancel(
        &self,
        folder_id: &str,
        cancel: watch::Receiver<bool>,
    ) -> AppResult<Vec<FlatFile>> {
        self.flatten_at(folder_id.to_string(), 0, cancel).await
    }

    fn flatten_at(
        &self,
        folder_id: String,
        depth: u32,
        cancel: watch::Receiver<bool>,
    ) -> BoxFuture<'_, AppResult<Vec<FlatFile>>> {
        async move {
            if *cancel.borrow() {
                return Err(AppError::cancelled(format!(
                    "Traversal cancelled before listing folder '{folder_id}'"
                )));
            }

            let entries = list_all(self.lister.as_ref(), &folder_id).await?;

            let mut files: Vec<FlatFile> = Vec::new();
            let mut subfolders: Vec<String> = Vec::new();
            for entry in &entries {
                if entry.is_folder() {
                    subfolders.push(entry.id.clone());
                } else {
                    files.push(FlatFile::from(entry));
                }
            }

            if depth < self.max_depth {
                for sub_id in subfolders {
                    match self.flatten_at(sub_id.clone(), depth + 1, cancel.clone()).await {
                        Ok(sub_files) => files.extend(sub_files),
                        // Cancellation is a caller decision, not a branch
                        // failure; it must stop the whole traversal.
                        Err(e) if e.kind == ErrorKind::Cancelled => return Err(e),
                        Err(e) => {
                            warn!(
                                folder_id = %sub_id,
                                error = %e,
                                "Sub-folder fetch failed; siblings continue"
                            );
                        }
                    }
                }
            } else if !subfolders.is_empty() {
                debug!(
                    folder_id = %folder_id,
                    skipped = subfolders.len(),
                    max_depth = self.max_depth,
                    "Depth bound reached; not descending into sub-folders"
                );
            }

            Ok(files)
        }
        .boxed()
    }
}
