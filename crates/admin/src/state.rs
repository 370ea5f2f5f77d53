//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{AdminApiClient, ApiError};
use crate::config::AdminConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: AdminApiClient,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let api = AdminApiClient::new(&config.api_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, api }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &AdminApiClient {
        &self.inner.api
    }

    /// Browser-visible URL for a stored image path.
    #[must_use]
    pub fn image_url(&self, image: &str) -> String {
        luxe_core::images::resolve_image_url(&self.inner.config.public_api_url, image)
    }
}
