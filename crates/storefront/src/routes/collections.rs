//! Collection route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use luxe_core::CollectionId;
use tracing::instrument;

use super::products::ProductCardView;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Collection page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub current_path: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub products: Vec<ProductCardView>,
}

/// Display a collection with its products.
///
/// # Errors
///
/// Returns 404 for a non-numeric id or a collection the API does not know.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<CollectionShowTemplate> {
    let id: CollectionId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("collection {id}")))?;

    let collection = state.api().collection(id).await?;

    Ok(CollectionShowTemplate {
        current_path: format!("/collections/{}", collection.id),
        image_url: state.image_url(&collection.image),
        products: ProductCardView::list(&collection.products, &state),
        description: collection.description,
        name: collection.name,
    })
}
