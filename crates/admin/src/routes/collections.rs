//! Collections management route handlers.
//!
//! Collection metadata (name, description, image) and membership are saved
//! separately. Membership is always diffed against a fresh read of the
//! collection, then applied as removals followed by additions, one request
//! at a time.

use askama::Template;
use axum::{
    extract::{Multipart, Path, RawForm, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use luxe_core::{
    Collection, CollectionId, Product, ProductId,
    forms::CollectionForm,
    membership::{MembershipDiff, toggle},
};
use tracing::instrument;

use crate::{api::ApiError, error::AppError, filters, state::AppState};

use super::uploads::{MultipartForm, upload_images};
use super::{api_failure_status, render, render_with_status};

/// Collection row for the list page.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub id: CollectionId,
    pub name: String,
    pub description: String,
    pub count: i32,
    pub image_url: String,
}

impl CollectionView {
    fn new(collection: &Collection, state: &AppState) -> Self {
        Self {
            id: collection.id,
            name: collection.name.clone(),
            description: collection.description.clone(),
            count: collection.count,
            image_url: state.image_url(&collection.image),
        }
    }
}

/// A product offered for membership, with its current state.
#[derive(Debug, Clone)]
pub struct ProductChoice {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub selected: bool,
}

impl ProductChoice {
    fn list(products: &[Product], selected: &[ProductId], state: &AppState) -> Vec<Self> {
        products
            .iter()
            .map(|product| Self {
                id: product.id,
                name: product.name.clone(),
                category: product.category.clone(),
                image_url: state.image_url(product.gallery().first().map_or("", String::as_str)),
                selected: selected.contains(&product.id),
            })
            .collect()
    }
}

/// Collections list page template.
#[derive(Template)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub current_path: &'static str,
    pub collections: Vec<CollectionView>,
    pub error: Option<String>,
}

/// Collection create/edit form template.
///
/// When editing, the product choices reflect the saved membership and are
/// posted on their own; when creating, they ride along with the form.
#[derive(Template)]
#[template(path = "collections/form.html")]
pub struct CollectionFormTemplate {
    pub current_path: &'static str,
    pub collection_id: Option<CollectionId>,
    pub form: CollectionForm,
    pub image_url: Option<String>,
    pub products: Vec<ProductChoice>,
    pub error: Option<String>,
    pub notices: Vec<String>,
}

impl CollectionFormTemplate {
    fn new(
        state: &AppState,
        collection_id: Option<CollectionId>,
        form: CollectionForm,
        products: Vec<ProductChoice>,
    ) -> Self {
        let image_url = (!form.image.is_empty()).then(|| state.image_url(&form.image));
        Self {
            current_path: "/collections",
            collection_id,
            form,
            image_url,
            products,
            error: None,
            notices: Vec::new(),
        }
    }
}

async fn all_products(state: &AppState) -> Vec<Product> {
    state.api().products().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch products for collection form: {e}");
        Vec::new()
    })
}

/// Edit page reflecting the collection as the API currently holds it.
async fn edit_page(state: &AppState, id: CollectionId) -> Result<CollectionFormTemplate, ApiError> {
    let (collection, products) = tokio::join!(state.api().collection(id), all_products(state));
    let collection = collection?;
    let choices = ProductChoice::list(&products, &collection.product_ids(), state);

    Ok(CollectionFormTemplate::new(
        state,
        Some(id),
        CollectionForm::from(&collection),
        choices,
    ))
}

/// Send the removals, then the additions. Stops at the first failure.
async fn apply_membership(
    state: &AppState,
    id: CollectionId,
    diff: &MembershipDiff,
) -> Result<(), ApiError> {
    for &product_id in &diff.to_remove {
        state
            .api()
            .remove_product_from_collection(id, product_id)
            .await?;
        tracing::info!(collection_id = %id, product_id = %product_id, "Product removed from collection");
    }
    for &product_id in &diff.to_add {
        state
            .api()
            .add_product_to_collection(id, product_id)
            .await?;
        tracing::info!(collection_id = %id, product_id = %product_id, "Product added to collection");
    }
    Ok(())
}

fn parse_product_ids(raw: &[String]) -> Result<Vec<ProductId>, AppError> {
    raw.iter()
        .map(|value| {
            value
                .parse::<ProductId>()
                .map_err(|_| AppError::BadRequest(format!("invalid product id {value:?}")))
        })
        .collect()
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (collections, error) = match state.api().collections().await {
        Ok(collections) => (
            collections
                .iter()
                .map(|c| CollectionView::new(c, state))
                .collect(),
            error,
        ),
        Err(e) => {
            tracing::error!("Failed to fetch collections: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &CollectionsIndexTemplate {
            current_path: "/collections",
            collections,
            error,
        },
    )
}

/// Collections list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// New collection form handler.
#[instrument(skip(state))]
pub async fn new_collection(State(state): State<AppState>) -> Html<String> {
    let products = all_products(&state).await;
    render(&CollectionFormTemplate::new(
        &state,
        None,
        CollectionForm::default(),
        ProductChoice::list(&products, &[], &state),
    ))
}

/// Re-render the new collection form after a rejected create.
async fn rejected_new(
    state: &AppState,
    form: CollectionForm,
    selected: &[ProductId],
    status: StatusCode,
    error: String,
    notices: Vec<String>,
) -> Response {
    let products = all_products(state).await;
    let mut page = CollectionFormTemplate::new(
        state,
        None,
        form,
        ProductChoice::list(&products, selected, state),
    );
    page.error = Some(error);
    page.notices = notices;
    render_with_status(status, &page)
}

/// Create collection handler.
///
/// Required fields are checked before the image is uploaded. Selected
/// products are added once the collection exists.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submitted = MultipartForm::read(multipart).await?;
    let mut form = CollectionForm {
        name: submitted.text("name"),
        description: submitted.text("description"),
        image: submitted.text("image"),
    };
    let selected = parse_product_ids(&submitted.values("product_ids"))?;
    let files = submitted.take_files("image_file");

    if let Err(e) = form.check(!files.is_empty()) {
        let status = StatusCode::UNPROCESSABLE_ENTITY;
        return Ok(rejected_new(&state, form, &selected, status, e.to_string(), Vec::new()).await);
    }

    let upload = match upload_images(&state, files).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Image upload failed");
            let status = api_failure_status(&e);
            let error = e.user_message();
            return Ok(rejected_new(&state, form, &selected, status, error, Vec::new()).await);
        }
    };
    if let Some(path) = upload.paths.into_iter().next() {
        form.image = path;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            return Ok(rejected_new(
                &state,
                form,
                &selected,
                StatusCode::UNPROCESSABLE_ENTITY,
                e.to_string(),
                upload.notices,
            )
            .await);
        }
    };

    let collection = match state.api().create_collection(&input).await {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create collection");
            let status = api_failure_status(&e);
            let error = e.user_message();
            return Ok(rejected_new(&state, form, &selected, status, error, upload.notices).await);
        }
    };
    tracing::info!(collection_id = %collection.id, name = %collection.name, "Collection created");

    let diff = MembershipDiff::between(&[], &selected);
    if let Err(e) = apply_membership(&state, collection.id, &diff).await {
        tracing::error!(collection_id = %collection.id, error = %e, "Failed to add products");
        let mut page = edit_page(&state, collection.id).await?;
        page.error = Some(format!(
            "The collection was created but not all products were added: {}",
            e.user_message()
        ));
        return Ok(render_with_status(api_failure_status(&e), &page));
    }

    if upload.notices.is_empty() {
        Ok(Redirect::to("/collections").into_response())
    } else {
        let mut page = edit_page(&state, collection.id).await?;
        page.notices = upload.notices;
        Ok(render(&page).into_response())
    }
}

/// Edit collection form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<CollectionId>,
) -> Result<Html<String>, AppError> {
    Ok(render(&edit_page(&state, id).await?))
}

/// Update collection metadata handler. Membership is left untouched.
#[instrument(skip(state, multipart))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CollectionId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submitted = MultipartForm::read(multipart).await?;
    let mut form = CollectionForm {
        name: submitted.text("name"),
        description: submitted.text("description"),
        image: submitted.text("image"),
    };
    let files = submitted.take_files("image_file");

    let mut notices = Vec::new();
    let outcome = match form.check(!files.is_empty()) {
        Err(e) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        Ok(()) => match upload_images(&state, files).await {
            Err(e) => Err((api_failure_status(&e), e.user_message())),
            Ok(upload) => {
                notices = upload.notices;
                if let Some(path) = upload.paths.into_iter().next() {
                    form.image = path;
                }
                match form.validate() {
                    Err(e) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
                    Ok(input) => state
                        .api()
                        .update_collection(id, &input)
                        .await
                        .map_err(|e| (api_failure_status(&e), e.user_message())),
                }
            }
        },
    };

    match outcome {
        Ok(collection) if notices.is_empty() => {
            tracing::info!(collection_id = %collection.id, "Collection updated");
            Ok(Redirect::to("/collections").into_response())
        }
        Ok(collection) => {
            tracing::info!(collection_id = %collection.id, "Collection updated");
            let mut page = edit_page(&state, id).await?;
            page.notices = notices;
            Ok(render(&page).into_response())
        }
        Err((status, error)) => {
            tracing::warn!(collection_id = %id, %error, "Collection not updated");
            let mut page = edit_page(&state, id).await?;
            page.image_url = (!form.image.is_empty()).then(|| state.image_url(&form.image));
            page.form = form;
            page.error = Some(error);
            page.notices = notices;
            Ok(render_with_status(status, &page))
        }
    }
}

/// Delete collection handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<CollectionId>) -> Response {
    match state.api().delete_collection(id).await {
        Ok(()) => {
            tracing::info!(collection_id = %id, "Collection deleted");
            Redirect::to("/collections").into_response()
        }
        Err(e) => {
            tracing::error!(collection_id = %id, error = %e, "Failed to delete collection");
            let message = format!("Could not delete collection {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}

async fn save_membership(
    state: &AppState,
    id: CollectionId,
    select: impl FnOnce(Vec<ProductId>) -> Vec<ProductId>,
) -> Result<Response, AppError> {
    let collection = state.api().collection(id).await?;
    let original = collection.product_ids();
    let selected = select(original.clone());
    let diff = MembershipDiff::between(&original, &selected);

    if let Err(e) = apply_membership(state, id, &diff).await {
        tracing::error!(collection_id = %id, error = %e, "Failed to save collection products");
        let mut page = edit_page(state, id).await?;
        page.error = Some(format!(
            "Products were not fully saved: {}",
            e.user_message()
        ));
        return Ok(render_with_status(api_failure_status(&e), &page));
    }

    Ok(Redirect::to(&format!("/collections/{id}/edit")).into_response())
}

/// Save the checked products as the collection's members.
#[instrument(skip(state, body))]
pub async fn save_products(
    State(state): State<AppState>,
    Path(id): Path<CollectionId>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let raw: Vec<String> = url::form_urlencoded::parse(&body)
        .filter(|(key, _)| key == "product_ids")
        .map(|(_, value)| value.into_owned())
        .collect();
    let selected = parse_product_ids(&raw)?;

    save_membership(&state, id, |_| selected).await
}

/// Add or remove a single product.
#[instrument(skip(state))]
pub async fn toggle_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(CollectionId, ProductId)>,
) -> Result<Response, AppError> {
    save_membership(&state, id, |mut selected| {
        toggle(&mut selected, product_id);
        selected
    })
    .await
}
