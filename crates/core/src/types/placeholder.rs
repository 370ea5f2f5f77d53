//! "Coming soon" placeholders configured per site path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlaceholderId;

/// Message shown when a placeholder has no message of its own.
pub const DEFAULT_PLACEHOLDER_MESSAGE: &str =
    "We are working on this page. It will be available soon!";

/// Title pre-filled in the admin form for new placeholders.
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Oops, this page is under construction";

/// An admin-configured substitute for a site path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub id: PlaceholderId,
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Placeholder {
    /// Message to display, falling back to the standard text.
    #[must_use]
    pub fn display_message(&self) -> &str {
        if self.message.trim().is_empty() {
            DEFAULT_PLACEHOLDER_MESSAGE
        } else {
            &self.message
        }
    }
}

/// Response of `GET /placeholder/check?path=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderCheck {
    pub exists: bool,
    #[serde(default)]
    pub placeholder: Option<Placeholder>,
}

impl PlaceholderCheck {
    /// The placeholder to show, if the path is currently covered.
    #[must_use]
    pub fn into_active(self) -> Option<Placeholder> {
        if self.exists {
            self.placeholder.filter(|p| p.is_active)
        } else {
            None
        }
    }
}

/// Body of `POST /admin/placeholders` and `PUT /admin/placeholders/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderInput {
    pub path: String,
    pub title: String,
    pub message: String,
    pub is_active: bool,
}

impl Default for PlaceholderInput {
    fn default() -> Self {
        Self {
            path: String::new(),
            title: DEFAULT_PLACEHOLDER_TITLE.to_string(),
            message: DEFAULT_PLACEHOLDER_MESSAGE.to_string(),
            is_active: true,
        }
    }
}

impl From<&Placeholder> for PlaceholderInput {
    fn from(placeholder: &Placeholder) -> Self {
        Self {
            path: placeholder.path.clone(),
            title: placeholder.title.clone(),
            message: placeholder.message.clone(),
            is_active: placeholder.is_active,
        }
    }
}
