//! Page aggregation: drain a paginated folder listing into one flat list.

use tracing::{debug, warn};

use partsbook_core::result::AppResult;
use partsbook_core::traits::lister::FolderLister;
use partsbook_core::types::Entry;

/// List all immediate children of `folder_id`, following continuation
/// tokens until the listing is exhausted.
///
/// Entries are concatenated in the storage API's per-page order; no
/// cross-page re-sorting happens here. Terminates in `ceil(N / page_size)`
/// round trips for a folder with `N` entries.
///
/// An empty page is treated as terminal even when it carries a
/// continuation token: a malformed token must not loop the aggregation
/// forever.
pub async fn list_all(lister: &dyn FolderLister, folder_id: &str) -> AppResult<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = lister.list_page(folder_id, page_token.as_deref()).await?;
        pages += 1;

        if page.is_empty() {
            if page.next_token.is_some() {
                warn!(
                    folder_id,
                    "Empty page carried a continuation token; treating listing as exhausted"
                );
            }
            break;
        }

        entries.extend(page.entries);

        match page.next_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    debug!(folder_id, pages, total = entries.len(), "Aggregated folder listing");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use partsbook_core::error::AppError;
    use partsbook_core::types::{EntryKind, Page};

    use super::*;

    /// Serves a fixed sequence of pages and counts calls.
    #[derive(Debug)]
    struct SequenceLister {
        pages: Vec<Page>,
        calls: AtomicUsize,
    }

    impl SequenceLister {
        fn new(pages: Vec<Page>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FolderLister for SequenceLister {
        async fn list_page(&self, _folder_id: &str, _token: Option<&str>) -> AppResult<Page> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages
                .get(index)
                .cloned()
                .ok_or_else(|| AppError::internal("listing requested past the last page"))
        }
    }

    fn file(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            kind: EntryKind::File,
            download_ref: Some(format!("https://example.com/dl/{id}")),
        }
    }

    #[tokio::test]
    async fn concatenates_pages_in_order_with_minimal_round_trips() {
        let lister = SequenceLister::new(vec![
            Page {
                entries: vec![file("a"), file("b")],
                next_token: Some("t1".to_string()),
            },
            Page {
                entries: vec![file("c"), file("d")],
                next_token: Some("t2".to_string()),
            },
            Page {
                entries: vec![file("e")],
                next_token: None,
            },
        ]);

        let entries = list_all(&lister, "folder").await.unwrap();

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
        assert_eq!(lister.calls(), 3);
    }

    #[tokio::test]
    async fn empty_folder_takes_one_round_trip() {
        let lister = SequenceLister::new(vec![Page::empty()]);
        let entries = list_all(&lister, "folder").await.unwrap();
        assert!(entries.is_empty());
        assert_eq!(lister.calls(), 1);
    }

    #[tokio::test]
    async fn terminates_when_empty_page_carries_a_token() {
        // A malformed response: zero entries but a continuation token.
        // Following the token forever would never terminate.
        let lister = SequenceLister::new(vec![Page {
            entries: vec![],
            next_token: Some("bogus".to_string()),
        }]);

        let entries = list_all(&lister, "folder").await.unwrap();
        assert!(entries.is_empty());
        assert_eq!(lister.calls(), 1);
    }

    #[tokio::test]
    async fn listing_errors_propagate() {
        #[derive(Debug)]
        struct FailingLister;

        #[async_trait]
        impl FolderLister for FailingLister {
            async fn list_page(&self, _f: &str, _t: Option<&str>) -> AppResult<Page> {
                Err(AppError::external_service("boom"))
            }
        }

        let err = list_all(&FailingLister, "folder").await.unwrap_err();
        assert_eq!(err.kind, partsbook_core::error::ErrorKind::ExternalService);
    }
}
