//! Product detail route handler and shared product views.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use luxe_core::{Product, ProductId, carousel::Carousel, catalog};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Number of related products shown under a product.
const RELATED_LIMIT: usize = 3;

/// Shown for empty specification values.
const NOT_SPECIFIED: &str = "Not specified";

/// Product tile used by every listing.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub href: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: f64,
    pub reviews: i32,
    pub image_url: String,
}

impl ProductCardView {
    pub fn new(product: &Product, state: &AppState) -> Self {
        let image = product.gallery().into_iter().next().unwrap_or_default();
        Self {
            href: format!("/products/{}", product.id),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            rating: product.rating,
            reviews: product.reviews,
            image_url: state.image_url(&image),
        }
    }

    /// Build cards for a list of products.
    pub fn list<'a>(products: impl IntoIterator<Item = &'a Product>, state: &AppState) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::new(product, state))
            .collect()
    }
}

/// One carousel thumbnail.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub url: String,
    pub href: String,
    pub number: usize,
    pub active: bool,
}

/// Label/value row in the specifications block.
#[derive(Debug, Clone)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Carousel position query.
///
/// Kept as raw text so a malformed `?image=` still shows the product.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub image: Option<String>,
}

impl ProductQuery {
    /// Requested image index; anything that is not a whole number means the first.
    fn image_index(&self) -> usize {
        self.image
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub current_path: String,
    pub name: String,
    pub category: String,
    pub category_href: String,
    pub price: String,
    pub rating: f64,
    pub reviews: i32,
    pub description: String,
    pub current_image: String,
    pub gallery: Vec<GalleryImage>,
    pub has_controls: bool,
    pub prev_href: String,
    pub next_href: String,
    pub specs: Vec<SpecRow>,
    pub features: Vec<String>,
    pub related: Vec<ProductCardView>,
}

fn spec_row(label: &'static str, value: &str) -> SpecRow {
    let value = value.trim();
    SpecRow {
        label,
        value: if value.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            value.to_string()
        },
    }
}

/// Display a product with its carousel and related products.
///
/// # Errors
///
/// Returns 404 for a non-numeric id or a product the API does not know.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductShowTemplate> {
    let id: ProductId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("product {id}")))?;

    let (product, all) = tokio::join!(state.api().product(id), state.api().products());
    let product = product?;
    let all = all.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch related products: {e}");
        Vec::new()
    });

    let base = format!("/products/{}", product.id);
    let images = product.gallery();
    let carousel = Carousel::new(images.len(), query.image_index());

    let gallery = images
        .iter()
        .enumerate()
        .map(|(index, image)| GalleryImage {
            url: state.image_url(image),
            href: format!("{base}?image={index}"),
            number: index + 1,
            active: index == carousel.index(),
        })
        .collect();

    let current_image = state.image_url(images.get(carousel.index()).map_or("", String::as_str));

    let related = ProductCardView::list(
        catalog::related_products(&all, &product, RELATED_LIMIT),
        &state,
    );

    Ok(ProductShowTemplate {
        current_path: base.clone(),
        category_href: format!("/catalog?category={}", urlencoding::encode(&product.category)),
        category: product.category.clone(),
        price: product.price.to_string(),
        rating: product.rating,
        reviews: product.reviews,
        description: product.description.clone(),
        current_image,
        gallery,
        has_controls: carousel.has_controls(),
        prev_href: format!("{base}?image={}", carousel.prev_index()),
        next_href: format!("{base}?image={}", carousel.next_index()),
        specs: vec![
            spec_row("Dimensions", &product.dimensions),
            spec_row("Material", &product.material),
            spec_row("Color", &product.color),
        ],
        features: product.features.clone(),
        related,
        name: product.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_index_falls_back_to_first() {
        let query = |raw: Option<&str>| ProductQuery {
            image: raw.map(ToString::to_string),
        };
        assert_eq!(query(Some("2")).image_index(), 2);
        assert_eq!(query(Some("abc")).image_index(), 0);
        assert_eq!(query(Some("-1")).image_index(), 0);
        assert_eq!(query(Some("")).image_index(), 0);
        assert_eq!(query(None).image_index(), 0);
    }

    #[test]
    fn test_spec_defaults_when_empty() {
        assert_eq!(spec_row("Color", "  ").value, NOT_SPECIFIED);
        assert_eq!(spec_row("Color", "Walnut").value, "Walnut");
    }
}
