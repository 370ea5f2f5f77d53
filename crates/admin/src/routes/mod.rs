//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                   - Liveness check
//! GET  /health/ready                             - Readiness check (pings the catalog API)
//!
//! # Dashboard
//! GET  /                                         - Counts overview
//!
//! # Products
//! GET  /products                                 - Product list
//! GET  /products/new                             - New product form
//! POST /products                                 - Create product (multipart)
//! GET  /products/{id}/edit                       - Edit product form
//! POST /products/{id}                            - Update product (multipart)
//! POST /products/{id}/delete                     - Delete product
//!
//! # Categories
//! GET  /categories                               - Category list
//! GET  /categories/new                           - New category form
//! POST /categories                               - Create category (multipart)
//! GET  /categories/{id}/edit                     - Edit category form
//! POST /categories/{id}                          - Update category (multipart)
//! POST /categories/{id}/delete                   - Delete category
//!
//! # Collections
//! GET  /collections                              - Collection list
//! GET  /collections/new                          - New collection form
//! POST /collections                              - Create collection (multipart)
//! GET  /collections/{id}/edit                    - Edit form and product selection
//! POST /collections/{id}                         - Update collection (multipart)
//! POST /collections/{id}/delete                  - Delete collection
//! POST /collections/{id}/products                - Save product membership
//! POST /collections/{id}/products/{pid}/toggle   - Add or remove one product
//!
//! # Content
//! GET  /contacts                                 - Contact submissions
//! POST /contacts/{id}/delete                     - Delete submission
//! GET  /faqs                                     - FAQ list
//! GET  /faqs/new, POST /faqs                     - Create FAQ
//! GET  /faqs/{id}/edit, POST /faqs/{id}          - Edit FAQ
//! POST /faqs/{id}/delete                         - Delete FAQ
//! GET  /placeholders                             - Placeholder list
//! GET  /placeholders/new, POST /placeholders     - Create placeholder
//! GET  /placeholders/{id}/edit                   - Edit placeholder
//! POST /placeholders/{id}                        - Update placeholder
//! POST /placeholders/{id}/toggle                 - Flip the active flag
//! POST /placeholders/{id}/delete                 - Delete placeholder
//!
//! # Database
//! GET  /database                                 - Dump and restore page
//! POST /database/dump                            - Create a dump
//! POST /database/restore                         - Restore from an uploaded dump (multipart)
//! ```

pub mod categories;
pub mod collections;
pub mod contacts;
pub mod dashboard;
pub mod database;
pub mod faqs;
pub mod health;
pub mod placeholders;
pub mod products;
mod uploads;

use askama::Template;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// Largest accepted database dump upload.
pub const MAX_RESTORE_BYTES: usize = 100 * 1024 * 1024;

/// Largest accepted product/category/collection form, several images included.
const MAX_FORM_BYTES: usize = 32 * 1024 * 1024;

/// Create all page routes for the admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        // Products
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new_product))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/edit", get(products::edit))
        .route("/products/{id}/delete", post(products::delete))
        // Categories
        .route("/categories", get(categories::index).post(categories::create))
        .route("/categories/new", get(categories::new_category))
        .route("/categories/{id}", post(categories::update))
        .route("/categories/{id}/edit", get(categories::edit))
        .route("/categories/{id}/delete", post(categories::delete))
        // Collections
        .route(
            "/collections",
            get(collections::index).post(collections::create),
        )
        .route("/collections/new", get(collections::new_collection))
        .route("/collections/{id}", post(collections::update))
        .route("/collections/{id}/edit", get(collections::edit))
        .route("/collections/{id}/delete", post(collections::delete))
        .route(
            "/collections/{id}/products",
            post(collections::save_products),
        )
        .route(
            "/collections/{id}/products/{product_id}/toggle",
            post(collections::toggle_product),
        )
        // Contacts
        .route("/contacts", get(contacts::index))
        .route("/contacts/{id}/delete", post(contacts::delete))
        // FAQs
        .route("/faqs", get(faqs::index).post(faqs::create))
        .route("/faqs/new", get(faqs::new_faq))
        .route("/faqs/{id}", post(faqs::update))
        .route("/faqs/{id}/edit", get(faqs::edit))
        .route("/faqs/{id}/delete", post(faqs::delete))
        // Placeholders
        .route(
            "/placeholders",
            get(placeholders::index).post(placeholders::create),
        )
        .route("/placeholders/new", get(placeholders::new_placeholder))
        .route("/placeholders/{id}", post(placeholders::update))
        .route("/placeholders/{id}/edit", get(placeholders::edit))
        .route("/placeholders/{id}/toggle", post(placeholders::toggle))
        .route("/placeholders/{id}/delete", post(placeholders::delete))
        // Database
        .route("/database", get(database::index))
        .route("/database/dump", post(database::dump))
        .route(
            "/database/restore",
            post(database::restore).layer(DefaultBodyLimit::max(MAX_RESTORE_BYTES)),
        )
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
}

/// Health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Render a template, logging render failures.
pub(crate) fn render(template: &impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Render a template with an explicit status code.
pub(crate) fn render_with_status(status: StatusCode, template: &impl Template) -> Response {
    (status, render(template)).into_response()
}

/// Status for a page re-rendered after a failed API call.
pub(crate) const fn api_failure_status(err: &crate::api::ApiError) -> StatusCode {
    match err {
        crate::api::ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}
