//! Luxe Storefront library.
//!
//! The public furniture site: home page, catalog, product and collection
//! pages, contact form and "coming soon" placeholders. All data comes from the
//! external catalog API; this crate only fetches, renders and submits.
//!
//! The router is built here so tests can drive it without binding a port.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state};
use tower_http::services::{ServeDir, ServeFile};

use state::AppState;

/// Static assets, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Build the storefront application router.
///
/// Health checks bypass the placeholder gate; every response gets a request
/// id and the security headers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .route_service(
            "/placeholder.svg",
            ServeFile::new(format!("{STATIC_DIR}/placeholder.svg")),
        )
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(routes::not_found)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::placeholder_gate,
        ))
        .merge(routes::health_routes())
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
    use url::Url;

    use super::*;
    use crate::config::StorefrontConfig;

    /// Points at a closed port; handlers under test must not reach it.
    fn test_app() -> Router {
        let config = StorefrontConfig::for_api(Url::parse("http://127.0.0.1:9/api").unwrap());
        app(AppState::new(config).unwrap())
    }

    #[tokio::test]
    async fn test_health_bypasses_placeholder_gate() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_error_page() {
        let response = test_app()
            .oneshot(Request::get("/no-such-page").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Page not found"));
    }

    #[tokio::test]
    async fn test_invalid_contact_is_rejected_locally() {
        let request = Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Irina&email=&phone=&message=Hello"))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
