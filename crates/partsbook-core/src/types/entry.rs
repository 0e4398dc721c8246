//! Folder and file entries returned by the storage API.

use serde::{Deserialize, Serialize};

/// MIME type the storage API uses to mark folder entries.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Whether an entry is a folder or a leaf file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A folder that may contain further entries.
    Folder,
    /// A leaf file with downloadable content.
    File,
}

impl EntryKind {
    /// Derive the entry kind from a storage API MIME type.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type == FOLDER_MIME_TYPE {
            Self::Folder
        } else {
            Self::File
        }
    }
}

/// One node returned by the storage API listing endpoint.
///
/// The `id` is opaque and stable across requests; `name` is a display
/// string and is not guaranteed unique within a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Folder or file.
    pub kind: EntryKind,
    /// Opaque content reference, present only for file entries.
    pub download_ref: Option<String>,
}

impl Entry {
    /// True for folder entries.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// A file projection produced by recursive flattening.
///
/// The owning folder's position in the tree is discarded; only what is
/// needed to display and download the file survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFile {
    /// Display name.
    pub name: String,
    /// Opaque unique identifier.
    pub id: String,
    /// Opaque content reference used to retrieve the file bytes.
    pub download_ref: Option<String>,
}

impl From<&Entry> for FlatFile {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            id: entry.id.clone(),
            download_ref: entry.download_ref.clone(),
        }
    }
}
