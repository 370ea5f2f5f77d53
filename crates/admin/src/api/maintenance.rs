//! Image upload, database dump and restore, health.

use luxe_core::{DumpInfo, RestoreResult, UploadedImage};
use reqwest::multipart::{Form, Part};
use tracing::instrument;

use super::{AdminApiClient, ApiError, check_status, decode};

impl AdminApiClient {
    /// Upload an image; the API answers with its stored `/uploads/...` path.
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/admin/upload"))
            .multipart(form)
            .send()
            .await?;
        decode(check_status(response, "/admin/upload").await?).await
    }

    /// Ask the API to write a database dump (and forward it to Telegram when
    /// the API is configured to).
    #[instrument(skip(self))]
    pub async fn create_dump(&self) -> Result<DumpInfo, ApiError> {
        let response = self.client.post(self.url("/admin/db/dump")).send().await?;
        decode(check_status(response, "/admin/db/dump").await?).await
    }

    /// Replace the database with an uploaded dump. Destructive.
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn restore_dump(&self, filename: &str, data: Vec<u8>) -> Result<RestoreResult, ApiError> {
        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("dump", part);

        let response = self
            .client
            .post(self.url("/admin/db/restore"))
            .multipart(form)
            .send()
            .await?;
        decode(check_status(response, "/admin/db/restore").await?).await
    }

    /// Ping the API's health endpoint.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        check_status(response, "/health").await?;
        Ok(())
    }
}
