//! Database dump and restore commands.
//!
//! # Usage
//!
//! ```bash
//! # Ask the API for a fresh dump
//! luxe-cli db dump
//!
//! # Replace the database with a dump file
//! luxe-cli db restore backups/dump_20241115.dump --yes
//! ```

use std::path::Path;

use luxe_admin::api::AdminApiClient;
use luxe_core::{DumpInfo, RestoreResult};

use super::CommandError;

/// Create a dump on the API server.
pub async fn dump(api: &AdminApiClient) -> Result<DumpInfo, CommandError> {
    tracing::info!("Requesting database dump...");
    let info = api.create_dump().await?;

    tracing::info!(
        filename = %info.filename,
        path = %info.path,
        size = %info.size_mb(),
        telegram_sent = info.telegram_sent,
        "Dump created"
    );
    if !info.telegram_sent {
        tracing::warn!("Dump was not forwarded to Telegram");
    }

    Ok(info)
}

/// Upload `file` and replace the database with it.
pub async fn restore(
    api: &AdminApiClient,
    file: &Path,
    confirmed: bool,
) -> Result<RestoreResult, CommandError> {
    if !confirmed {
        return Err(CommandError::NotConfirmed("restore the database"));
    }

    let data = tokio::fs::read(file).await.map_err(|source| CommandError::Io {
        path: file.display().to_string(),
        source,
    })?;
    let filename = file
        .file_name()
        .map_or_else(|| "dump".to_string(), |name| name.to_string_lossy().into_owned());

    tracing::warn!(%filename, size = data.len(), "Restoring database, current data will be replaced");
    let result = api.restore_dump(&filename, data).await?;
    tracing::info!(status = %result.status, message = %result.message, "Restore finished");

    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_admin::config::parse_api_url;

    use super::*;

    #[tokio::test]
    async fn test_restore_requires_confirmation() {
        let api = AdminApiClient::new(&parse_api_url("http://127.0.0.1:9/api").unwrap()).unwrap();
        let err = restore(&api, Path::new("missing.dump"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::NotConfirmed(_)));
    }

    #[tokio::test]
    async fn test_restore_reports_missing_file() {
        let api = AdminApiClient::new(&parse_api_url("http://127.0.0.1:9/api").unwrap()).unwrap();
        let err = restore(&api, Path::new("/nonexistent/luxe.dump"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Io { .. }));
    }
}
