//! Recursive file listing command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use partsbook_core::error::AppError;
use partsbook_service::{DataSource, LibraryService, filter};

use crate::output::{self, OutputFormat};

/// Arguments for the files command
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Folder ID to flatten
    pub folder_id: String,

    /// Only show files whose name or id matches
    #[arg(long)]
    pub filter: Option<String>,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// Name
    name: String,
    /// File ID
    id: String,
}

/// Execute the files command
pub async fn execute(
    args: &FilesArgs,
    service: &LibraryService,
    format: OutputFormat,
) -> Result<(), AppError> {
    let listing = service.folder_files(&args.folder_id).await?;

    let files = match &args.filter {
        Some(query) => filter::filter_files(&listing.items, query),
        None => listing.items,
    };

    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow {
            name: f.name.clone(),
            id: f.id.clone(),
        })
        .collect();

    output::print_list(&rows, format);

    if let DataSource::Cache { fetched_at } = listing.source {
        output::print_warning(&format!(
            "Offline mode: showing cached data from {}",
            fetched_at.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
