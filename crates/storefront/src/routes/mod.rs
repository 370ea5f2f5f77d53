//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (categories, featured, collections, FAQ)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the catalog API)
//!
//! # Catalog
//! GET  /catalog                - Catalog (?category=&sort=)
//! GET  /products/{id}          - Product detail (?image=N selects the carousel image)
//! GET  /collections/{id}       - Collection detail
//! GET  /new                    - New arrivals
//!
//! # Contact
//! GET  /contact                - Contact form
//! POST /contact                - Submit contact form
//!
//! # Static pages
//! GET  /portfolio              - Portfolio
//! GET  /about                  - About us
//!
//! Anything else                - 404 error page
//! ```
//!
//! Any `GET` page may be replaced by a "coming soon" placeholder, see
//! [`crate::middleware::placeholder`].

pub mod catalog;
pub mod collections;
pub mod contact;
pub mod health;
pub mod home;
pub mod pages;
pub mod products;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/catalog", get(catalog::index))
        .route("/products/{id}", get(products::show))
        .route("/collections/{id}", get(collections::show))
        .route("/new", get(pages::new_arrivals))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/portfolio", get(pages::portfolio))
        .route("/about", get(pages::about))
}

/// Health check routes, kept outside the placeholder gate.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
