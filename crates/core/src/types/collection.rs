//! Collection entity.

use serde::{Deserialize, Serialize};

use super::{CollectionId, Product, ProductId, null_as_default};

/// A curated grouping of products.
///
/// `products` is only populated by `GET /collections/{id}`; list responses omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Membership count maintained by the API.
    #[serde(default)]
    pub count: i32,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub products: Vec<Product>,
}

impl Collection {
    /// IDs of the member products, in API order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }
}

/// Body of `POST /admin/collections` and `PUT /admin/collections/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionInput {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl From<&Collection> for CollectionInput {
    fn from(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            description: collection.description.clone(),
            image: collection.image.clone(),
        }
    }
}

/// Body of `POST /admin/collections/{id}/products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductRequest {
    pub product_id: ProductId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entry_without_products() {
        let json = r#"{"id": 3, "name": "Lobby", "description": "", "image": "/uploads/l.jpg", "count": 4}"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.count, 4);
        assert!(collection.products.is_empty());
    }

    #[test]
    fn test_add_product_request_shape() {
        let body = serde_json::to_string(&AddProductRequest {
            product_id: ProductId::new(9),
        })
        .unwrap();
        assert_eq!(body, r#"{"product_id":9}"#);
    }
}
