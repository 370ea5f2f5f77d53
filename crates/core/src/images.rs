//! Image URL resolution and upload checks.

/// Shown wherever an entity has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Build the browser-visible URL for a stored image path.
///
/// Paths under `/uploads/` live on the API server and are prefixed with its
/// public origin; other paths and absolute URLs are returned unchanged.
#[must_use]
pub fn resolve_image_url(public_api_base: &str, image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if image.starts_with("/uploads/") {
        return format!("{}{image}", public_api_base.trim_end_matches('/'));
    }
    image.to_string()
}

/// Why an uploaded file was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("file is empty")]
    Empty,
    #[error("{filename} is not an image")]
    NotAnImage { filename: String },
    #[error("{filename} is larger than 5 MB")]
    TooLarge { filename: String },
}

/// Check an uploaded file before forwarding it to the API.
pub fn validate_upload(filename: &str, content_type: &str, size: usize) -> Result<(), UploadError> {
    if size == 0 {
        return Err(UploadError::Empty);
    }
    if !content_type.starts_with("image/") {
        return Err(UploadError::NotAnImage {
            filename: filename.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            filename: filename.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_uses_placeholder() {
        assert_eq!(resolve_image_url("http://api:8080", "  "), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_uploads_are_prefixed() {
        assert_eq!(
            resolve_image_url("http://localhost:8080/", "/uploads/1_chair.jpg"),
            "http://localhost:8080/uploads/1_chair.jpg"
        );
    }

    #[test]
    fn test_other_paths_unchanged() {
        assert_eq!(resolve_image_url("http://api", "/sofa.png"), "/sofa.png");
        assert_eq!(
            resolve_image_url("http://api", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_upload_checks() {
        assert!(validate_upload("a.jpg", "image/jpeg", 1024).is_ok());
        assert_eq!(validate_upload("a.jpg", "image/jpeg", 0), Err(UploadError::Empty));
        assert!(matches!(
            validate_upload("a.pdf", "application/pdf", 10),
            Err(UploadError::NotAnImage { .. })
        ));
        assert!(matches!(
            validate_upload("big.png", "image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge { .. })
        ));
        assert!(validate_upload("max.png", "image/png", MAX_UPLOAD_BYTES).is_ok());
    }
}
