//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{filters, state::AppState};

use super::render;

/// Dashboard metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub products: usize,
    pub categories: usize,
    pub collections: usize,
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: &'static str,
    pub metrics: DashboardMetrics,
}

fn count<T, E: std::fmt::Display>(what: &str, result: Result<Vec<T>, E>) -> usize {
    match result {
        Ok(items) => items.len(),
        Err(e) => {
            tracing::error!("Failed to fetch {what}: {e}");
            0
        }
    }
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let api = state.api();
    let (products, categories, collections) =
        tokio::join!(api.products(), api.categories(), api.collections());

    let metrics = DashboardMetrics {
        products: count("products", products),
        categories: count("categories", categories),
        collections: count("collections", collections),
    };

    render(&DashboardTemplate {
        current_path: "/",
        metrics,
    })
}
