//! Responses of the admin maintenance endpoints.

use serde::{Deserialize, Serialize};

/// Response of `POST /admin/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Relative path, e.g. `/uploads/1731660000_chair.jpg`.
    pub url: String,
    #[serde(default)]
    pub filename: String,
}

/// Response of `POST /admin/db/dump`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpInfo {
    #[serde(default)]
    pub status: String,
    pub filename: String,
    #[serde(default)]
    pub path: String,
    /// Dump size in bytes.
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub telegram_sent: bool,
}

impl DumpInfo {
    /// Size in megabytes with two decimals.
    #[must_use]
    pub fn size_mb(&self) -> String {
        #[allow(clippy::cast_precision_loss)] // dump sizes are far below 2^52 bytes
        let mb = self.size as f64 / 1024.0 / 1024.0;
        format!("{mb:.2} MB")
    }
}

/// Response of `POST /admin/db/restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
