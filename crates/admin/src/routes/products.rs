//! Product management route handlers.

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use luxe_core::{Product, ProductId, forms::ProductForm};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

use super::uploads::{MultipartForm, upload_images};
use super::{api_failure_status, render, render_with_status};

/// Product row for the list page.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
    pub image_count: usize,
    pub featured: bool,
}

impl ProductView {
    fn new(product: &Product, state: &AppState) -> Self {
        let gallery = product.gallery();
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image_url: state.image_url(gallery.first().map_or("", String::as_str)),
            image_count: gallery.len(),
            featured: product.featured,
        }
    }
}

/// A gallery image offered as a "keep" checkbox.
#[derive(Debug, Clone)]
pub struct ImageChoice {
    pub path: String,
    pub url: String,
}

impl ImageChoice {
    fn list(paths: &[String], state: &AppState) -> Vec<Self> {
        paths
            .iter()
            .map(|path| Self {
                path: path.clone(),
                url: state.image_url(path),
            })
            .collect()
    }
}

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub current_path: &'static str,
    pub products: Vec<ProductView>,
    pub error: Option<String>,
}

/// Product create/edit form template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub current_path: &'static str,
    /// `None` for a new product.
    pub product_id: Option<ProductId>,
    pub form: ProductForm,
    pub images: Vec<ImageChoice>,
    pub categories: Vec<String>,
    pub error: Option<String>,
    pub notices: Vec<String>,
}

impl ProductFormTemplate {
    async fn new(
        state: &AppState,
        product_id: Option<ProductId>,
        form: ProductForm,
        images: &[String],
    ) -> Self {
        let categories = match state.api().categories().await {
            Ok(categories) => categories.into_iter().map(|c| c.name).collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch categories for product form: {e}");
                Vec::new()
            }
        };

        Self {
            current_path: "/products",
            product_id,
            form,
            images: ImageChoice::list(images, state),
            categories,
            error: None,
            notices: Vec::new(),
        }
    }

    fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

/// Read the text fields of a product form.
fn product_form(submitted: &MultipartForm) -> ProductForm {
    ProductForm {
        name: submitted.text("name"),
        category: submitted.text("category"),
        price: submitted.text("price"),
        rating: submitted.text("rating"),
        reviews: submitted.text("reviews"),
        description: submitted.text("description"),
        color: submitted.text("color"),
        dimensions: submitted.text("dimensions"),
        material: submitted.text("material"),
        features: submitted.text("features"),
        featured: submitted.checked("featured"),
    }
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (products, error) = match state.api().products().await {
        Ok(products) => (
            products
                .iter()
                .map(|p| ProductView::new(p, state))
                .collect(),
            error,
        ),
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &ProductsIndexTemplate {
            current_path: "/products",
            products,
            error,
        },
    )
}

/// Products list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// New product form handler.
#[instrument(skip(state))]
pub async fn new_product(State(state): State<AppState>) -> Html<String> {
    render(&ProductFormTemplate::new(&state, None, ProductForm::default(), &[]).await)
}

/// Validate, upload new images, then create or update the product.
async fn save(
    state: &AppState,
    product_id: Option<ProductId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submitted = MultipartForm::read(multipart).await?;
    let form = product_form(&submitted);
    let kept = submitted.values("keep_images");
    let files = submitted.take_files("images");

    let mut input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            let page = ProductFormTemplate::new(state, product_id, form, &kept)
                .await
                .with_error(e);
            return Ok(render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page));
        }
    };

    let upload = match upload_images(state, files).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Image upload failed");
            let page = ProductFormTemplate::new(state, product_id, form, &kept)
                .await
                .with_error(e.user_message());
            return Ok(render_with_status(api_failure_status(&e), &page));
        }
    };

    let mut gallery = kept.clone();
    gallery.extend(upload.paths);
    input.set_images(gallery);

    let result = match product_id {
        Some(id) => state.api().update_product(id, &input).await,
        None => state.api().create_product(&input).await,
    };

    match result {
        Ok(product) => {
            tracing::info!(product_id = %product.id, name = %product.name, "Product saved");
            if upload.notices.is_empty() {
                return Ok(Redirect::to("/products").into_response());
            }
            let mut page = ProductFormTemplate::new(
                state,
                Some(product.id),
                ProductForm::from(&product),
                &product.gallery(),
            )
            .await;
            page.notices = upload.notices;
            Ok(render(&page).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save product");
            let page = ProductFormTemplate::new(state, product_id, form, &kept)
                .await
                .with_error(e.user_message());
            Ok(render_with_status(api_failure_status(&e), &page))
        }
    }
}

/// Create product handler.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    save(&state, None, multipart).await
}

/// Edit product form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Html<String>, AppError> {
    let product = state.api().product(id).await?;
    let page = ProductFormTemplate::new(
        &state,
        Some(id),
        ProductForm::from(&product),
        &product.gallery(),
    )
    .await;
    Ok(render(&page))
}

/// Update product handler.
#[instrument(skip(state, multipart))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    save(&state, Some(id), multipart).await
}

/// Delete product handler.
///
/// Returns to the list only once the API confirmed the delete.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> Response {
    match state.api().delete_product(id).await {
        Ok(()) => {
            tracing::info!(product_id = %id, "Product deleted");
            Redirect::to("/products").into_response()
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Failed to delete product");
            let message = format!("Could not delete product {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}
