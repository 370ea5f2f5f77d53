//! CLI command implementations.

pub mod db;
pub mod status;

use luxe_admin::api::ApiError;
use luxe_admin::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The API base URL is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Reading a local file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A destructive command was run without confirmation.
    #[error("Refusing to {0} without --yes")]
    NotConfirmed(&'static str),
}
