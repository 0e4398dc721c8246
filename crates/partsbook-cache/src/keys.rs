//! Cache key builders for all Partsbook cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all Partsbook cache keys.
const PREFIX: &str = "partsbook";

/// Cache key for the top-level folder listing.
pub fn top_folders() -> String {
    format!("{PREFIX}:folders:top")
}

/// Cache key for the flattened file list of one folder.
pub fn folder_files(folder_id: &str) -> String {
    format!("{PREFIX}:files:{folder_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_folders_key() {
        assert_eq!(top_folders(), "partsbook:folders:top");
    }

    #[test]
    fn test_folder_files_key() {
        assert_eq!(
            folder_files("199DuYp35mYFnhUH4lpnIgBxZ"),
            "partsbook:files:199DuYp35mYFnhUH4lpnIgBxZ"
        );
    }
}
