//! Luxe Admin library.
//!
//! Back-office screens for the catalog API: products, categories,
//! collections and their membership, contact submissions, FAQs,
//! placeholders, and database dump/restore.
//!
//! # Security
//!
//! There is no login. Every write goes straight to the catalog API's
//! `/admin/*` endpoints, so the binary must only listen on an internal
//! address.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state};
use tower_http::services::ServeDir;

use state::AppState;

/// Static assets, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/admin/static";

/// Build the admin application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .merge(routes::health_routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::security_headers_middleware,
        ))
        .layer(from_fn(middleware::request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::{AdminConfig, parse_api_url};

    /// Points at a closed port; handlers under test must not reach it.
    fn test_app() -> Router {
        let config = AdminConfig::for_api(parse_api_url("http://127.0.0.1:9/api").unwrap());
        app(AppState::new(config).unwrap())
    }

    #[tokio::test]
    async fn test_health_carries_admin_headers() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_invalid_faq_is_rejected_locally() {
        let request = Request::post("/faqs")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("question=&answer=Yes&order=1"))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("question"));
    }

    #[tokio::test]
    async fn test_readiness_fails_without_api() {
        let response = test_app()
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
