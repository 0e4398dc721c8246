//! Top-level folder listing command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use partsbook_core::error::AppError;
use partsbook_service::{DataSource, LibraryService, filter};

use crate::output::{self, OutputFormat};

/// Arguments for the folders command
#[derive(Debug, Args)]
pub struct FoldersArgs {
    /// Only show folders whose name matches
    #[arg(long)]
    pub filter: Option<String>,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Folder ID
    id: String,
}

/// Execute the folders command
pub async fn execute(
    args: &FoldersArgs,
    service: &LibraryService,
    format: OutputFormat,
) -> Result<(), AppError> {
    let listing = service.top_folders().await?;

    let folders = match &args.filter {
        Some(query) => filter::filter_folders(&listing.items, query),
        None => listing.items,
    };

    let rows: Vec<FolderRow> = folders
        .iter()
        .map(|f| FolderRow {
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
