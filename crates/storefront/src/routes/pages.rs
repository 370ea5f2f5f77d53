//! New arrivals and static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use luxe_core::catalog;
use tracing::instrument;

use super::products::ProductCardView;
use crate::filters;
use crate::state::AppState;

/// Number of products on the new arrivals page.
const NEW_ARRIVALS_LIMIT: usize = 8;

/// New arrivals page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/new.html")]
pub struct NewArrivalsTemplate {
    pub current_path: String,
    pub products: Vec<ProductCardView>,
}

/// Portfolio page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioTemplate {
    pub current_path: String,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub current_path: String,
}

/// Display the most recently added products.
#[instrument(skip(state))]
pub async fn new_arrivals(State(state): State<AppState>) -> NewArrivalsTemplate {
    let products = state.api().products().await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch products: {e}");
        Vec::new()
    });

    NewArrivalsTemplate {
        current_path: "/new".to_string(),
        products: ProductCardView::list(catalog::newest(&products, NEW_ARRIVALS_LIMIT), &state),
    }
}

pub async fn portfolio() -> PortfolioTemplate {
    PortfolioTemplate {
        current_path: "/portfolio".to_string(),
    }
}

pub async fn about() -> AboutTemplate {
    AboutTemplate {
        current_path: "/about".to_string(),
    }
}
