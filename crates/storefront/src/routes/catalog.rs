//! Catalog page: category filter and sort over the full product list.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use luxe_core::catalog::{self, CategoryFilter, SortBy};
use serde::Deserialize;
use tracing::instrument;

use super::products::ProductCardView;
use crate::filters;
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Sidebar entry.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Sort dropdown entry.
#[derive(Debug, Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub current_path: String,
    pub heading: String,
    pub categories: Vec<CategoryLink>,
    pub sort_options: Vec<SortOption>,
    /// Category value carried by the sort form; empty for all.
    pub category_param: String,
    pub products: Vec<ProductCardView>,
    pub error: Option<String>,
}

fn category_href(name: Option<&str>, sort: SortBy) -> String {
    let sort_param = match sort {
        SortBy::Featured => String::new(),
        other => format!("sort={}", other.as_param()),
    };
    match (name, sort_param.is_empty()) {
        (None, true) => "/catalog".to_string(),
        (None, false) => format!("/catalog?{sort_param}"),
        (Some(name), true) => format!("/catalog?category={}", urlencoding::encode(name)),
        (Some(name), false) => {
            format!("/catalog?category={}&{sort_param}", urlencoding::encode(name))
        }
    }
}

/// Display the filtered and sorted catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogTemplate {
    let filter = CategoryFilter::from_param(query.category.as_deref());
    let sort = SortBy::from_param(query.sort.as_deref());

    let (products, categories) = tokio::join!(state.api().products(), state.api().categories());

    let mut error = None;
    let products = products.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch products: {e}");
        error = Some("We could not load the catalog. Please try again later.".to_string());
        Vec::new()
    });
    let categories = categories.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch categories: {e}");
        Vec::new()
    });

    let mut links = vec![CategoryLink {
        name: CategoryFilter::ALL_LABEL.to_string(),
        href: category_href(None, sort),
        active: filter == CategoryFilter::All,
    }];
    links.extend(
        catalog::available_categories(&categories, &products)
            .into_iter()
            .map(|name| CategoryLink {
                href: category_href(Some(&name), sort),
                active: matches!(&filter, CategoryFilter::Named(selected) if *selected == name),
                name,
            }),
    );

    let sort_options = SortBy::ALL
        .iter()
        .map(|&option| SortOption {
            value: option.as_param(),
            label: option.label(),
            selected: option == sort,
        })
        .collect();

    let visible = catalog::filter_and_sort(&products, &filter, sort);

    CatalogTemplate {
        current_path: "/catalog".to_string(),
        heading: filter.label().to_string(),
        categories: links,
        sort_options,
        category_param: match &filter {
            CategoryFilter::All => String::new(),
            CategoryFilter::Named(name) => name.clone(),
        },
        products: ProductCardView::list(visible, &state),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href_variants() {
        assert_eq!(category_href(None, SortBy::Featured), "/catalog");
        assert_eq!(category_href(None, SortBy::Rating), "/catalog?sort=rating");
        assert_eq!(
            category_href(Some("Dining tables"), SortBy::PriceLow),
            "/catalog?category=Dining%20tables&sort=price-low"
        );
    }
}
