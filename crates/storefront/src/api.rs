//! Catalog API client for the public storefront endpoints.
//!
//! The storefront only reads the catalog and submits contact messages; the
//! admin endpoints live in the back-office binary.

use luxe_core::{
    Category, Collection, CollectionId, Contact, ContactInput, Faq, PlaceholderCheck, Product,
    ProductId,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
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

/// Catalog API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host/api`).
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("luxe-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// List all products in API order.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("/products").await
    }

    /// List products flagged as featured.
    #[instrument(skip(self))]
    pub async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("/products/featured").await
    }

    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get_json(&format!("/products/{id}")).await
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("/categories").await
    }

    #[instrument(skip(self))]
    pub async fn collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.get_list("/collections").await
    }

    /// Fetch a collection together with its products.
    #[instrument(skip(self))]
    pub async fn collection(&self, id: CollectionId) -> Result<Collection, ApiError> {
        self.get_json(&format!("/collections/{id}")).await
    }

    #[instrument(skip(self))]
    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.get_list("/faqs").await
    }

    /// Ask whether `path` is covered by a placeholder.
    #[instrument(skip(self))]
    pub async fn check_placeholder(&self, path: &str) -> Result<PlaceholderCheck, ApiError> {
        self.get_json(&format!(
            "/placeholder/check?path={}",
            urlencoding::encode(path)
        ))
        .await
    }

    /// Store a contact form submission.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn submit_contact(&self, input: &ContactInput) -> Result<Contact, ApiError> {
        let response = self
            .client
            .post(self.url("/contacts"))
            .json(input)
            .send()
            .await?;
        decode(check_status(response, "/contacts").await?).await
    }

    /// Ping the API's health endpoint.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        check_status(response, "/health").await?;
        Ok(())
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
