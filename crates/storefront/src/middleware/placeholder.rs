//! "Coming soon" placeholder gate.
//!
//! Every page `GET` asks the catalog API whether its path is covered by an
//! active placeholder. Covered paths render the placeholder page instead of
//! the real one. When the check itself fails the real page is served.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::state::AppState;

/// Paths that are never replaced by a placeholder.
const EXEMPT_PREFIXES: &[&str] = &["/static/", "/health", "/placeholder.svg", "/favicon.ico"];

/// Placeholder page template.
#[derive(Template, WebTemplate)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub current_path: String,
    pub title: String,
    pub message: String,
}

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Serve the placeholder page for covered paths.
pub async fn placeholder_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if request.method() != Method::GET || is_exempt(&path) {
        return next.run(request).await;
    }

    match state.api().check_placeholder(&path).await {
        Ok(check) => {
            if let Some(placeholder) = check.into_active() {
                tracing::debug!(path = %path, "Serving placeholder");
                return PlaceholderTemplate {
                    current_path: path,
                    message: placeholder.display_message().to_string(),
                    title: placeholder.title,
                }
                .into_response();
            }
        }
        Err(e) => {
            tracing::warn!(path = %path, "Placeholder check failed: {e}");
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_paths() {
        assert!(is_exempt("/static/css/main.css"));
        assert!(is_exempt("/health/ready"));
        assert!(!is_exempt("/portfolio"));
        assert!(!is_exempt("/"));
    }
}
