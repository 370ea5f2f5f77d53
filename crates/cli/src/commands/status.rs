//! API health and placeholder lookups.

use luxe_admin::api::AdminApiClient;

use super::CommandError;

/// Check that the catalog API answers its health endpoint.
pub async fn health(api: &AdminApiClient) -> Result<(), CommandError> {
    api.health().await?;
    tracing::info!("Catalog API is healthy");
    Ok(())
}

/// Report whether the storefront would show a placeholder at `path`.
///
/// Returns `true` when an active placeholder covers the path.
pub async fn placeholder(api: &AdminApiClient, path: &str) -> Result<bool, CommandError> {
    let check = api.check_placeholder(path).await?;

    match check.into_active() {
        Some(placeholder) => {
            tracing::info!(
                path,
                placeholder_id = %placeholder.id,
                title = %placeholder.title,
                "Placeholder is active"
            );
            Ok(true)
        }
        None => {
            tracing::info!(path, "No active placeholder, the real page is shown");
            Ok(false)
        }
    }
}
