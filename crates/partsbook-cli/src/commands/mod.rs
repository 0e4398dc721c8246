//! CLI command definitions and dispatch.

pub mod cache;
pub mod download;
pub mod files;
pub mod folders;

use clap::{Parser, Subcommand};

use partsbook_core::config::AppConfig;
use partsbook_core::error::AppError;
use partsbook_net::monitor::ConnectivityState;
use partsbook_service::LibraryService;

use crate::output::OutputFormat;

/// Partsbook — offline-capable parts catalog browser
#[derive(Debug, Parser)]
#[command(name = "partsbook", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Force offline mode: serve cached snapshots only
    #[arg(long)]
    pub offline: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the top-level folders of the library
    Folders(folders::FoldersArgs),
    /// Recursively list the PDF files inside a folder
    Files(files::FilesArgs),
    /// Download one file
    Download(download::DownloadArgs),
    /// Cache maintenance
    Cache(cache::CacheArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let (service, monitor) = LibraryService::build(config).await?;
        if self.offline {
            monitor.set_state(ConnectivityState::Offline);
        }

        match &self.command {
            Commands::Folders(args) => folders::execute(args, &service, self.format).await,
            Commands::Files(args) => files::execute(args, &service, self.format).await,
            Commands::Download(args) => download::execute(args, &service).await,
            Commands::Cache(args) => cache::execute(args, &service).await,
        }
    }
}
