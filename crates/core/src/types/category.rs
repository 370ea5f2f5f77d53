//! Category entity.

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// A catalog category as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon name rendered on the home page tile.
    #[serde(default)]
    pub icon: String,
    /// Link target of the home page tile.
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub image: String,
}

impl Category {
    /// Link for the home page tile, defaulting to the filtered catalog.
    #[must_use]
    pub fn link(&self) -> String {
        if self.href.is_empty() {
            format!("/catalog?category={}", urlencoding::encode(&self.name))
        } else {
            self.href.clone()
        }
    }
}

/// Body of `POST /admin/categories` and `PUT /admin/categories/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub href: String,
    pub image: String,
}

impl From<&Category> for CategoryInput {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            href: category.href.clone(),
            image: category.image.clone(),
        }
    }
}
