//! Name filtering over listings.
//!
//! The search box itself is the UI's concern; this is the data-level
//! predicate behind it, shared so every surface filters the same way.

use partsbook_core::types::{Entry, FlatFile};

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches(query: &str, haystack: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Folders whose name matches the query.
pub fn filter_folders(folders: &[Entry], query: &str) -> Vec<Entry> {
    folders
        .iter()
        .filter(|f| matches(query, &f.name))
        .cloned()
        .collect()
}

/// Files whose name or id matches the query.
pub fn filter_files(files: &[FlatFile], query: &str) -> Vec<FlatFile> {
    files
        .iter()
        .filter(|f| matches(query, &f.name) || matches(query, &f.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use partsbook_core::types::EntryKind;

    use super::*;

    fn folder(name: &str) -> Entry {
        Entry {
            id: name.to_string(),
            name: name.to_string(),
            kind: EntryKind::Folder,
            download_ref: None,
        }
    }

    fn file(id: &str, name: &str) -> FlatFile {
        FlatFile {
            name: name.to_string(),
            id: id.to_string(),
            download_ref: None,
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let folders = vec![folder("Engines"), folder("Transmissions")];
        assert_eq!(filter_folders(&folders, "").len(), 2);
    }

    #[test]
    fn folder_match_is_case_insensitive() {
        let folders = vec![folder("Engines"), folder("Transmissions")];
        let hits = filter_folders(&folders, "engine");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Engines");
    }

    #[test]
    fn files_match_on_name_or_id() {
        let files = vec![
            file("abc123", "crankshaft.pdf"),
            file("xyz789", "piston.pdf"),
        ];
        assert_eq!(filter_files(&files, "crank").len(), 1);
        assert_eq!(filter_files(&files, "XYZ").len(), 1);
        assert!(filter_files(&files, "camshaft").is_empty());
    }
}
