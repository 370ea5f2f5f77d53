//! Contact submissions, FAQs and placeholders.

use luxe_core::{
    Contact, ContactId, Faq, FaqId, FaqInput, Placeholder, PlaceholderId, PlaceholderInput,
};
use reqwest::Method;
use tracing::instrument;

use super::{AdminApiClient, ApiError};

impl AdminApiClient {
    #[instrument(skip(self))]
    pub async fn contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get_list("/admin/contacts").await
    }

    #[instrument(skip(self))]
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/contacts/{id}")).await
    }

    #[instrument(skip(self))]
    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.get_list("/faqs").await
    }

    #[instrument(skip(self))]
    pub async fn faq(&self, id: FaqId) -> Result<Faq, ApiError> {
        self.get_json(&format!("/admin/faqs/{id}")).await
    }

    #[instrument(skip(self, input))]
    pub async fn create_faq(&self, input: &FaqInput) -> Result<Faq, ApiError> {
        self.send_json(Method::POST, "/admin/faqs", input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_faq(&self, id: FaqId, input: &FaqInput) -> Result<Faq, ApiError> {
        self.send_json(Method::PUT, &format!("/admin/faqs/{id}"), input)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_faq(&self, id: FaqId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/faqs/{id}")).await
    }

    #[instrument(skip(self))]
    pub async fn placeholders(&self) -> Result<Vec<Placeholder>, ApiError> {
        self.get_list("/admin/placeholders").await
    }

    #[instrument(skip(self))]
    pub async fn placeholder(&self, id: PlaceholderId) -> Result<Placeholder, ApiError> {
        self.get_json(&format!("/admin/placeholders/{id}")).await
    }

    #[instrument(skip(self, input), fields(path = %input.path))]
    pub async fn create_placeholder(
        &self,
        input: &PlaceholderInput,
    ) -> Result<Placeholder, ApiError> {
        self.send_json(Method::POST, "/admin/placeholders", input)
            .await
    }

    #[instrument(skip(self, input), fields(path = %input.path))]
    pub async fn update_placeholder(
        &self,
        id: PlaceholderId,
        input: &PlaceholderInput,
    ) -> Result<Placeholder, ApiError> {
        self.send_json(Method::PUT, &format!("/admin/placeholders/{id}"), input)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_placeholder(&self, id: PlaceholderId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/placeholders/{id}")).await
    }

    /// Look up the placeholder covering `path`, as the storefront does.
    #[instrument(skip(self))]
    pub async fn check_placeholder(
        &self,
        path: &str,
    ) -> Result<luxe_core::PlaceholderCheck, ApiError> {
        let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
        self.get_json(&format!("/placeholder/check?path={encoded}"))
            .await
    }
}
