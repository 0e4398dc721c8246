//! File download command.

use clap::Args;

use partsbook_core::error::AppError;
use partsbook_service::LibraryService;

use crate::output;

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Folder ID the file lives under (recursively)
    pub folder_id: String,

    /// File ID to download
    pub file_id: String,

    /// Output path; defaults to the file's name in the current directory
    #[arg(short, long)]
    pub out: Option<String>,

    /// Print the content base64-encoded to stdout instead of saving
    #[arg(long)]
    pub base64: bool,
}

/// Execute the download command
pub async fn execute(args: &DownloadArgs, service: &LibraryService) -> Result<(), AppError> {
    let listing = service.folder_files(&args.folder_id).await?;
    let file = listing
        .items
        .iter()
        .find(|f| f.id == args.file_id)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "File '{}' not found under folder '{}'",
                args.file_id, args.folder_id
            ))
        })?;

    if args.base64 {
        let encoded = service.download_base64(file).await?;
        println!("{}", encoded);
        return Ok(());
    }

    let bytes = service.download(file).await?;
    let out = args.out.clone().unwrap_or_else(|| file.name.clone());
    tokio::fs::write(&out, &bytes).await?;

    output::print_success(&format!("Saved '{}' ({} bytes) to {}", file.name, bytes.len(), out));
    Ok(())
}
