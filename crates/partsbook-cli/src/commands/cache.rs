//! Cache maintenance commands.

use clap::{Args, Subcommand};

use partsbook_core::error::AppError;
use partsbook_service::LibraryService;

use crate::output;

/// Arguments for cache commands
#[derive(Debug, Args)]
pub struct CacheArgs {
    /// Cache subcommand
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Cache subcommands
#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// Remove cached snapshots older than the given age
    Prune {
        /// Snapshots older than this many days are removed
        #[arg(long, default_value = "30")]
        max_age_days: i64,
    },
}

/// Execute cache commands
pub async fn execute(args: &CacheArgs, service: &LibraryService) -> Result<(), AppError> {
    match &args.command {
        CacheCommand::Prune { max_age_days } => {
            let removed = service
                .prune_cache(chrono::Duration::days(*max_age_days))
                .await?;
            output::print_success(&format!("Pruned {} cache entries", removed));
        }
    }
    Ok(())
}
