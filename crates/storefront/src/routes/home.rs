//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use luxe_core::{Category, Collection, Faq};
use tracing::instrument;

use super::products::ProductCardView;
use crate::filters;
use crate::state::AppState;

/// Category tile.
#[derive(Debug, Clone)]
pub struct CategoryTileView {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub href: String,
    pub image_url: String,
}

impl CategoryTileView {
    fn new(category: &Category, state: &AppState) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            href: category.link(),
            image_url: state.image_url(&category.image),
        }
    }
}

/// Collection card, shared with the collection page.
#[derive(Debug, Clone)]
pub struct CollectionCardView {
    pub href: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub count: i32,
}

impl CollectionCardView {
    pub fn new(collection: &Collection, state: &AppState) -> Self {
        Self {
            href: format!("/collections/{}", collection.id),
            name: collection.name.clone(),
            description: collection.description.clone(),
            image_url: state.image_url(&collection.image),
            count: collection.count,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_path: String,
    pub categories: Vec<CategoryTileView>,
    pub featured: Vec<ProductCardView>,
    pub collections: Vec<CollectionCardView>,
    pub faqs: Vec<Faq>,
}

/// Display the home page.
///
/// The four sections load concurrently; a failed section renders empty.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let api = state.api();
    let (categories, featured, collections, faqs) = tokio::join!(
        api.categories(),
        api.featured_products(),
        api.collections(),
        api.faqs(),
    );

    let categories = categories.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch categories: {e}");
        Vec::new()
    });
    let featured = featured.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch featured products: {e}");
        Vec::new()
    });
    let collections = collections.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch collections: {e}");
        Vec::new()
    });
    let faqs = faqs.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch FAQs: {e}");
        Vec::new()
    });

    HomeTemplate {
        current_path: "/".to_string(),
        categories: categories
            .iter()
            .map(|c| CategoryTileView::new(c, &state))
            .collect(),
        featured: ProductCardView::list(&featured, &state),
        collections: collections
            .iter()
            .map(|c| CollectionCardView::new(c, &state))
            .collect(),
        faqs: Faq::ordered(faqs),
    }
}
