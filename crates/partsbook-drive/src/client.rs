//! HTTP listing client for the Google Drive v3 `files` endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use partsbook_core::config::drive::DriveConfig;
use partsbook_core::error::{AppError, ErrorKind};
use partsbook_core::result::AppResult;
use partsbook_core::traits::lister::FolderLister;
use partsbook_core::types::{Entry, EntryKind, Page};

/// Hard ceiling the listing endpoint accepts for `pageSize`.
const MAX_PAGE_SIZE: u32 = 1000;

/// One file record as returned on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    name: String,
    mime_type: String,
    web_content_link: Option<String>,
}

/// Response body of the listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
    next_page_token: Option<String>,
}

impl From<DriveFile> for Entry {
    fn from(file: DriveFile) -> Self {
        Entry {
            kind: EntryKind::from_mime_type(&file.mime_type),
            id: file.id,
            name: file.name,
            download_ref: file.web_content_link,
        }
    }
}

/// Listing client for the Drive v3 API.
///
/// All credentials and endpoint parameters come from [`DriveConfig`]; the
/// client holds no compiled-in literals. One call fetches one page; see
/// [`crate::pages::list_all`] for draining a full folder.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    config: DriveConfig,
}

impl DriveClient {
    /// Create a new listing client from configuration.
    pub fn new(config: DriveConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::configuration("drive.api_key must be set"));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self { http, config })
    }

    /// The configured root folder id.
    pub fn root_folder_id(&self) -> &str {
        &self.config.root_folder_id
    }

    /// Build the query string parameters for one listing request.
    fn list_query(&self, folder_id: &str, page_token: Option<&str>) -> Vec<(String, String)> {
        let mut params = vec![
            ("q".to_string(), format!("'{folder_id}' in parents")),
            ("key".to_string(), self.config.api_key.clone()),
            (
                "fields".to_string(),
                "nextPageToken, files(id, name, mimeType, webContentLink)".to_string(),
            ),
            (
                "pageSize".to_string(),
                self.config.page_size.clamp(1, MAX_PAGE_SIZE).to_string(),
            ),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken".to_string(), token.to_string()));
        }
        params
    }
}

#[async_trait]
impl FolderLister for DriveClient {
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> AppResult<Page> {
        if folder_id.is_empty() {
            return Err(AppError::validation("folder_id must not be empty"));
        }

        let url = format!("{}/files", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&self.list_query(folder_id, page_token))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Listing request for folder '{folder_id}' failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Listing request for folder '{folder_id}' returned {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read listing response for folder '{folder_id}': {e}"),
                e,
            )
        })?;

        let list: DriveFileList = serde_json::from_str(&body)?;

        debug!(
            folder_id,
            entries = list.files.len(),
            has_next = list.next_page_token.is_some(),
            "Fetched listing page"
        );

        Ok(Page {
            entries: list.files.into_iter().map(Entry::from).collect(),
            next_token: list.next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(page_size: u32) -> DriveClient {
        let config = DriveConfig {
            api_key: "test-key".to_string(),
            root_folder_id: "root-id".to_string(),
            page_size,
            ..DriveConfig::default()
        };
        DriveClient::new(config).unwrap()
    }

    #[test]
    fn construction_rejects_missing_api_key() {
        let err = DriveClient::new(DriveConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn query_contains_parent_filter_and_projection() {
        let client = client_with(1000);
        let params = client.list_query("folder-1", None);
        assert!(params.contains(&("q".to_string(), "'folder-1' in parents".to_string())));
        assert!(params.contains(&("key".to_string(), "test-key".to_string())));
        assert!(params.contains(&("pageSize".to_string(), "1000".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "pageToken"));
    }

    #[test]
    fn query_forwards_continuation_token_and_clamps_page_size() {
        let client = client_with(5000);
        let params = client.list_query("folder-1", Some("tok-2"));
        assert!(params.contains(&("pageToken".to_string(), "tok-2".to_string())));
        assert!(params.contains(&("pageSize".to_string(), "1000".to_string())));
    }

    #[tokio::test]
    async fn empty_folder_id_is_rejected() {
        let client = client_with(1000);
        let err = client.list_page("", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn wire_response_deserializes_into_page_entries() {
        let body = r#"{
            "nextPageToken": "tok-next",
            "files": [
                {"id": "f1", "name": "Engines", "mimeType": "application/vnd.google-apps.folder"},
                {"id": "d1", "name": "manual.pdf", "mimeType": "application/pdf",
                 "webContentLink": "https://example.com/dl/d1"}
            ]
        }"#;
        let list: DriveFileList = serde_json::from_str(body).unwrap();
        let entries: Vec<Entry> = list.files.into_iter().map(Entry::from).collect();

        assert_eq!(list.next_page_token.as_deref(), Some("tok-next"));
        assert_eq!(entries[0].kind, EntryKind::Folder);
        assert_eq!(entries[0].download_ref, None);
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(
            entries[1].download_ref.as_deref(),
            Some("https://example.com/dl/d1")
        );
    }

    #[test]
    fn wire_response_tolerates_missing_files_array() {
        let list: DriveFileList = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
        assert!(list.next_page_token.is_none());
    }
}
