//! Partsbook CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Cli;
use partsbook_core::config::AppConfig;
use partsbook_core::error::ErrorKind;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        // Being offline with no cached data is an expected state, not a
        // failure worth a stack of error formatting.
        if e.kind == ErrorKind::Offline {
            output::print_warning(&e.message);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Initialize tracing/logging from configuration, with the usual
/// `RUST_LOG` override.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
