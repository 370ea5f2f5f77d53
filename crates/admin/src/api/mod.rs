//! Catalog API client for the back-office.
//!
//! Covers the `/admin/*` endpoints plus the public reads the admin screens
//! need. Every write returns only after the API confirmed it; callers update
//! what they show based on that confirmation, never optimistically.
//!
//! Endpoints are grouped by area:
//! - [`catalog`] - products, categories, collections and membership
//! - [`content`] - contact submissions, FAQs and placeholders
//! - [`maintenance`] - image upload, database dump and restore, health

pub mod catalog;
pub mod content;
pub mod maintenance;

use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Message suitable for an admin-facing banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "The catalog API is unreachable.".to_string(),
            Self::Status { status, message } if message.is_empty() => {
                format!("The catalog API answered with status {status}.")
            }
            Self::Status { message, .. } => format!("The catalog API refused: {message}"),
            Self::NotFound(_) => "The item no longer exists.".to_string(),
            Self::Parse(_) => "The catalog API sent an unexpected response.".to_string(),
        }
    }
}

/// Catalog API client with access to the admin endpoints.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdminApiClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host/api`).
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("luxe-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(check_status(response, path).await?).await
    }

    /// GET a list endpoint. The API encodes empty lists as `null`.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let list: Option<Vec<T>> = self.get_json(path).await?;
        Ok(list.unwrap_or_default())
    }

    /// Send a JSON body and decode the JSON answer.
    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        decode(check_status(response, path).await?).await
    }

    /// Send a JSON body, ignoring whatever the API answers on success.
    async fn send_json_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        check_status(response, path).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.url(path)).send().await?;
        check_status(response, path).await?;
        Ok(())
    }
}

/// Turn non-success statuses into errors, keeping the plain-text body.
async fn check_status(
    response: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(path.to_string()));
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: message.trim().to_string(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = AdminApiClient::new(&Url::parse("http://localhost:8080/api").unwrap()).unwrap();
        assert_eq!(
            client.url("/admin/collections/3/products/7"),
            "http://localhost:8080/api/admin/collections/3/products/7"
        );
    }

    #[test]
    fn test_user_message_keeps_api_text() {
        let err = ApiError::Status {
            status: 400,
            message: "Invalid product ID".to_string(),
        };
        assert_eq!(err.user_message(), "The catalog API refused: Invalid product ID");

        let err = ApiError::Status {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "The catalog API answered with status 502.");
    }
}
