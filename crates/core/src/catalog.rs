//! Catalog filtering, sorting and product selection.
//!
//! Everything here is pure: inputs are borrowed snapshots of API data and the
//! result is a fresh ordering, so the catalog page can be re-rendered for any
//! `?category=&sort=` combination without touching the originals.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Product};

/// Catalog sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Keep the API's order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortBy {
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Parse a `?sort=` value. Unknown or missing values mean [`SortBy::Featured`].
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("rating") => Self::Rating,
            _ => Self::Featured,
        }
    }

    /// Query-string value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Rating => "Top rated",
        }
    }
}

/// Category selection on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Label of the "no filter" entry.
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a `?category=` value. Empty or `All` means no filter.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(name) if name == Self::ALL_LABEL => Self::All,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category == *name,
        }
    }

    /// Label shown in the sidebar and heading.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(name) => name,
        }
    }
}

/// Filter products by category, then sort them.
///
/// The sort is stable, so products that compare equal keep the API order.
#[must_use]
pub fn filter_and_sort<'a>(
    products: &'a [Product],
    filter: &CategoryFilter,
    sort: SortBy,
) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();

    match sort {
        SortBy::Featured => {}
        SortBy::PriceLow => visible.sort_by_key(|p| p.price),
        SortBy::PriceHigh => visible.sort_by_key(|p| Reverse(p.price)),
        SortBy::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    visible
}

/// Category names offered in the catalog sidebar.
///
/// Uses the category list when the API returned one, otherwise the distinct
/// product categories in the order they first appear.
#[must_use]
pub fn available_categories(categories: &[Category], products: &[Product]) -> Vec<String> {
    if !categories.is_empty() {
        return categories.iter().map(|c| c.name.clone()).collect();
    }

    let mut names: Vec<String> = Vec::new();
    for product in products {
        if !product.category.is_empty() && !names.contains(&product.category) {
            names.push(product.category.clone());
        }
    }
    names
}

/// Products to suggest on a product page.
///
/// Up to `limit` other products from the same category; when the category has
/// no other products, up to `limit` other products of any category.
#[must_use]
pub fn related_products<'a>(all: &'a [Product], current: &Product, limit: usize) -> Vec<&'a Product> {
    let others = || all.iter().filter(|p| p.id != current.id);

    let same_category: Vec<&Product> = others()
        .filter(|p| p.category == current.category)
        .take(limit)
        .collect();

    if same_category.is_empty() {
        others().take(limit).collect()
    } else {
        same_category
    }
}

/// The `limit` most recently added products (highest ids first).
#[must_use]
pub fn newest(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|p| Reverse(p.id));
    sorted.truncate(limit);
    sorted
}
