//! Multipart form collection and image upload forwarding.

use axum::extract::Multipart;
use luxe_core::images::{UploadError, validate_upload};

use crate::api::ApiError;
use crate::error::AppError;
use crate::state::AppState;

/// A file part of a multipart form.
#[derive(Debug)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A fully read multipart form.
///
/// Text fields keep their posting order; repeated names (checkbox groups)
/// appear once per value. File inputs left empty by the browser are dropped.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(filename) = field.file_name().map(ToString::to_string) {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?.to_vec();
                if filename.is_empty() && data.is_empty() {
                    continue;
                }
                form.files.push(FilePart {
                    field: name,
                    filename,
                    content_type,
                    data,
                });
            } else {
                let value = field.text().await?;
                form.fields.push((name, value));
            }
        }

        Ok(form)
    }

    /// Last value posted for `name`, or an empty string.
    pub fn text(&self, name: &str) -> String {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Every value posted for `name`, in order.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Whether a checkbox named `name` was ticked.
    pub fn checked(&self, name: &str) -> bool {
        matches!(self.text(name).as_str(), "true" | "on" | "1")
    }

    /// Take the files posted under `name`.
    pub fn take_files(&mut self, name: &str) -> Vec<FilePart> {
        let (taken, rest) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|file| file.field == name);
        self.files = rest;
        taken
    }
}

/// Result of forwarding a batch of images to the catalog API.
#[derive(Debug, Default)]
pub struct UploadOutcome {
    /// Stored `/uploads/...` paths, in posting order.
    pub paths: Vec<String>,
    /// One line per skipped file.
    pub notices: Vec<String>,
}

/// Validate and upload each file; invalid files are skipped with a notice.
///
/// A failed upload call aborts the batch.
pub async fn upload_images(
    state: &AppState,
    files: Vec<FilePart>,
) -> Result<UploadOutcome, ApiError> {
    let mut outcome = UploadOutcome::default();

    for file in files {
        if let Err(err) = validate_upload(&file.filename, &file.content_type, file.data.len()) {
            tracing::warn!(filename = %file.filename, error = %err, "Skipping upload");
            outcome.notices.push(skip_notice(&file.filename, &err));
            continue;
        }

        let uploaded = state
            .api()
            .upload_image(&file.filename, &file.content_type, file.data)
            .await?;
        tracing::info!(url = %uploaded.url, "Image uploaded");
        outcome.paths.push(uploaded.url);
    }

    Ok(outcome)
}

fn skip_notice(filename: &str, err: &UploadError) -> String {
    match err {
        UploadError::Empty => format!("Skipped: {filename} is empty"),
        _ => format!("Skipped: {err}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> MultipartForm {
        MultipartForm {
            fields: vec![
                ("name".to_string(), "Oak set".to_string()),
                ("product_ids".to_string(), "3".to_string()),
                ("product_ids".to_string(), "5".to_string()),
                ("featured".to_string(), "true".to_string()),
            ],
            files: vec![
                FilePart {
                    field: "images".to_string(),
                    filename: "a.png".to_string(),
                    content_type: "image/png".to_string(),
                    data: vec![1],
                },
                FilePart {
                    field: "dump".to_string(),
                    filename: "db.sql".to_string(),
                    content_type: "application/sql".to_string(),
                    data: vec![2],
                },
            ],
        }
    }

    #[test]
    fn test_text_and_values() {
        let form = form();
        assert_eq!(form.text("name"), "Oak set");
        assert_eq!(form.text("missing"), "");
        assert_eq!(form.values("product_ids"), vec!["3", "5"]);
        assert!(form.checked("featured"));
        assert!(!form.checked("confirm"));
    }

    #[test]
    fn test_take_files_by_field() {
        let mut form = form();
        let images = form.take_files("images");
        assert_eq!(images.len(), 1);
        assert_eq!(images.first().unwrap().filename, "a.png");
        assert!(form.take_files("images").is_empty());
        assert_eq!(form.take_files("dump").len(), 1);
    }

    #[test]
    fn test_skip_notice_names_the_file() {
        assert_eq!(
            skip_notice("sofa.jpg", &UploadError::Empty),
            "Skipped: sofa.jpg is empty"
        );
        let err = UploadError::NotAnImage {
            filename: "price.pdf".to_string(),
        };
        assert_eq!(skip_notice("price.pdf", &err), "Skipped: price.pdf is not an image");
    }
}
