//! Luxe CLI - Maintenance tools for the catalog API.
//!
//! # Usage
//!
//! ```bash
//! # Create a database dump (forwarded to Telegram when the API is set up for it)
//! luxe-cli db dump
//!
//! # Restore the database from a dump file
//! luxe-cli db restore backups/dump_20241115.dump --yes
//!
//! # Check that the API is up
//! luxe-cli health
//!
//! # See whether a storefront path is behind a placeholder
//! luxe-cli placeholder check /portfolio
//! ```
//!
//! The API base URL comes from `--api-url` or `LUXE_API_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luxe_admin::api::AdminApiClient;
use luxe_admin::config::parse_api_url;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "luxe-cli")]
#[command(author, version, about = "Luxe catalog maintenance tools")]
struct Cli {
    /// Catalog API base URL, including the `/api` prefix
    #[arg(long, env = "LUXE_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database backups
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Check the catalog API health endpoint
    Health,
    /// Inspect storefront placeholders
    Placeholder {
        #[command(subcommand)]
        action: PlaceholderAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Create a dump on the API server
    Dump,
    /// Replace the database with a dump file
    Restore {
        /// Dump file to upload
        file: PathBuf,

        /// Confirm that the current database will be replaced
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PlaceholderAction {
    /// Show whether a path is covered by an active placeholder
    Check {
        /// Storefront path, e.g. /portfolio
        path: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let raw_url = cli.api_url.ok_or_else(|| {
        luxe_admin::config::ConfigError::MissingEnvVar("LUXE_API_URL".to_string())
    })?;
    let api = AdminApiClient::new(&parse_api_url(&raw_url)?)?;

    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Dump => {
                commands::db::dump(&api).await?;
            }
            DbAction::Restore { file, yes } => {
                commands::db::restore(&api, &file, yes).await?;
            }
        },
        Commands::Health => commands::status::health(&api).await?,
        Commands::Placeholder { action } => match action {
            PlaceholderAction::Check { path } => {
                commands::status::placeholder(&api, &path).await?;
            }
        },
    }
    Ok(())
}
