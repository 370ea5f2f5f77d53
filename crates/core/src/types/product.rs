//! Product entity.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId, null_as_default};

/// A furniture product as returned by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: Price,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: i32,
    #[serde(default)]
    pub description: String,
    /// Main image, kept by the API for older clients.
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub material: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    /// Shown in the home page highlight section.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Images to show in the product carousel.
    ///
    /// Falls back to the single main image when the gallery is empty.
    #[must_use]
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        if self.image.is_empty() {
            Vec::new()
        } else {
            vec![self.image.clone()]
        }
    }

    /// Build the edit payload for this product, used to pre-fill forms.
    #[must_use]
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            description: self.description.clone(),
            image: self.image.clone(),
            images: self.gallery(),
            color: self.color.clone(),
            dimensions: self.dimensions.clone(),
            material: self.material.clone(),
            features: self.features.clone(),
            featured: self.featured,
        }
    }
}

/// Body of `POST /admin/products` and `PUT /admin/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub rating: f64,
    pub reviews: i32,
    pub description: String,
    /// First entry of `images`, or empty.
    pub image: String,
    pub images: Vec<String>,
    pub color: String,
    pub dimensions: String,
    pub material: String,
    pub features: Vec<String>,
    pub featured: bool,
}

impl ProductInput {
    /// Replace the gallery, keeping `image` in sync with its first entry.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.image = images.first().cloned().unwrap_or_default();
        self.images = images;
    }
}
