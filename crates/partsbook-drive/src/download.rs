//! File content download.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use tracing::debug;

use partsbook_core::config::drive::DriveConfig;
use partsbook_core::error::{AppError, ErrorKind};
use partsbook_core::result::AppResult;
use partsbook_core::types::FlatFile;

/// Downloads file content through a file's opaque download reference.
///
/// The reference is the `webContentLink` the listing API returned for the
/// file; a plain GET on it yields the raw bytes. Rendering, streaming, and
/// printing are the consumer's concern.
#[derive(Debug, Clone)]
pub struct Downloader {
    http: reqwest::Client,
}

impl Downloader {
    /// Create a new downloader from configuration.
    pub fn new(config: &DriveConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self { http })
    }

    /// Fetch the raw bytes of a file.
    pub async fn fetch(&self, file: &FlatFile) -> AppResult<Bytes> {
        let download_ref = file.download_ref.as_deref().ok_or_else(|| {
            AppError::validation(format!("File '{}' has no download reference", file.name))
        })?;

        let response = self.http.get(download_ref).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Download request for '{}' failed: {e}", file.name),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Download request for '{}' returned {status}",
                file.name
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read download body for '{}': {e}", file.name),
                e,
            )
        })?;

        debug!(file = %file.name, bytes = bytes.len(), "Downloaded file content");
        Ok(bytes)
    }

    /// Fetch a file and return its content base64-encoded, the form PDF
    /// viewer components consume.
    pub async fn fetch_base64(&self, file: &FlatFile) -> AppResult<String> {
        let bytes = self.fetch(file).await?;
        Ok(BASE64.encode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_without_download_ref_is_rejected() {
        let downloader = Downloader::new(&DriveConfig::default()).unwrap();
        let file = FlatFile {
            name: "manual.pdf".to_string(),
            id: "f1".to_string(),
            download_ref: None,
        };
        let err = downloader.fetch(&file).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
