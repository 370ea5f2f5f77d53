//! Security headers middleware.
//!
//! Stricter than the storefront: no scripts at all, and the admin may never be
//! framed. Upload previews come from the catalog API origin.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Build the admin Content-Security-Policy for a given image origin.
#[must_use]
pub fn content_security_policy(image_origin: &str) -> String {
    format!(
        "default-src 'none'; \
         script-src 'none'; \
         style-src 'self' 'unsafe-inline'; \
         img-src 'self' data: {image_origin}; \
         form-action 'self'; \
         base-uri 'none'; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to all admin responses.
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(
        HeaderName::from_static("x-robots-tag"),
        HeaderValue::from_static("noindex, nofollow"),
    );

    let csp = content_security_policy(&state.config().public_api_url);
    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_blocks_scripts() {
        let csp = content_security_policy("http://localhost:8080");
        assert!(csp.contains("script-src 'none'"));
        assert!(csp.contains("img-src 'self' data: http://localhost:8080;"));
    }
}
