//! Products, categories, collections and collection membership.

use luxe_core::{
    AddProductRequest, Category, CategoryId, CategoryInput, Collection, CollectionId,
    CollectionInput, Product, ProductId, ProductInput,
};
use reqwest::Method;
use tracing::instrument;

use super::{AdminApiClient, ApiError};

impl AdminApiClient {
    // =========================================================================
    // Products
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("/products").await
    }

    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get_json(&format!("/products/{id}")).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.send_json(Method::POST, "/admin/products", input).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.send_json(Method::PUT, &format!("/admin/products/{id}"), input)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/products/{id}")).await
    }

    // =========================================================================
    // Categories
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_list("/categories").await
    }

    /// Find one category. The API has no single-category read.
    #[instrument(skip(self))]
    pub async fn category(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.categories()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("/categories/{id}")))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.send_json(Method::POST, "/admin/categories", input).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        self.send_json(Method::PUT, &format!("/admin/categories/{id}"), input)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/categories/{id}")).await
    }

    // =========================================================================
    // Collections
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.get_list("/collections").await
    }

    /// Fetch a collection with its current members.
    #[instrument(skip(self))]
    pub async fn collection(&self, id: CollectionId) -> Result<Collection, ApiError> {
        self.get_json(&format!("/collections/{id}")).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_collection(&self, input: &CollectionInput) -> Result<Collection, ApiError> {
        self.send_json(Method::POST, "/admin/collections", input)
            .await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update_collection(
        &self,
        id: CollectionId,
        input: &CollectionInput,
    ) -> Result<Collection, ApiError> {
        self.send_json(Method::PUT, &format!("/admin/collections/{id}"), input)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_collection(&self, id: CollectionId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/collections/{id}")).await
    }

    #[instrument(skip(self))]
    pub async fn add_product_to_collection(
        &self,
        id: CollectionId,
        product_id: ProductId,
    ) -> Result<(), ApiError> {
        self.send_json_unit(
            Method::POST,
            &format!("/admin/collections/{id}/products"),
            &AddProductRequest { product_id },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_product_from_collection(
        &self,
        id: CollectionId,
        product_id: ProductId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/admin/collections/{id}/products/{product_id}"))
            .await
    }
}
