//! Category management route handlers.

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use luxe_core::{Category, CategoryId, forms::CategoryForm};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

use super::uploads::{MultipartForm, upload_images};
use super::{api_failure_status, render, render_with_status};

/// Category row for the list page.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub link: String,
    pub image_url: Option<String>,
}

impl CategoryView {
    fn new(category: &Category, state: &AppState) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            link: category.link(),
            image_url: (!category.image.is_empty()).then(|| state.image_url(&category.image)),
        }
    }
}

/// Categories list page template.
#[derive(Template)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub current_path: &'static str,
    pub categories: Vec<CategoryView>,
    pub error: Option<String>,
}

/// Category create/edit form template.
#[derive(Template)]
#[template(path = "categories/form.html")]
pub struct CategoryFormTemplate {
    pub current_path: &'static str,
    pub category_id: Option<CategoryId>,
    pub form: CategoryForm,
    pub image_url: Option<String>,
    pub error: Option<String>,
    pub notices: Vec<String>,
}

impl CategoryFormTemplate {
    fn new(state: &AppState, category_id: Option<CategoryId>, form: CategoryForm) -> Self {
        let image_url = (!form.image.is_empty()).then(|| state.image_url(&form.image));
        Self {
            current_path: "/categories",
            category_id,
            form,
            image_url,
            error: None,
            notices: Vec::new(),
        }
    }
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (categories, error) = match state.api().categories().await {
        Ok(categories) => (
            categories
                .iter()
                .map(|c| CategoryView::new(c, state))
                .collect(),
            error,
        ),
        Err(e) => {
            tracing::error!("Failed to fetch categories: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &CategoriesIndexTemplate {
            current_path: "/categories",
            categories,
            error,
        },
    )
}

/// Categories list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// New category form handler.
#[instrument(skip(state))]
pub async fn new_category(State(state): State<AppState>) -> Html<String> {
    render(&CategoryFormTemplate::new(
        &state,
        None,
        CategoryForm::default(),
    ))
}

async fn save(
    state: &AppState,
    category_id: Option<CategoryId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submitted = MultipartForm::read(multipart).await?;
    let mut form = CategoryForm {
        name: submitted.text("name"),
        description: submitted.text("description"),
        icon: submitted.text("icon"),
        href: submitted.text("href"),
        image: submitted.text("image"),
    };
    let files = submitted.take_files("image_file");

    if let Err(e) = form.validate() {
        let mut page = CategoryFormTemplate::new(state, category_id, form);
        page.error = Some(e.to_string());
        return Ok(render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page));
    }

    let upload = match upload_images(state, files).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Image upload failed");
            let mut page = CategoryFormTemplate::new(state, category_id, form);
            page.error = Some(e.user_message());
            return Ok(render_with_status(api_failure_status(&e), &page));
        }
    };
    if let Some(path) = upload.paths.into_iter().next() {
        form.image = path;
    }

    let input = form.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;
    let result = match category_id {
        Some(id) => state.api().update_category(id, &input).await,
        None => state.api().create_category(&input).await,
    };

    match result {
        Ok(category) => {
            tracing::info!(category_id = %category.id, name = %category.name, "Category saved");
            if upload.notices.is_empty() {
                return Ok(Redirect::to("/categories").into_response());
            }
            let mut page =
                CategoryFormTemplate::new(state, Some(category.id), CategoryForm::from(&category));
            page.notices = upload.notices;
            Ok(render(&page).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save category");
            let mut page = CategoryFormTemplate::new(state, category_id, form);
            page.error = Some(e.user_message());
            Ok(render_with_status(api_failure_status(&e), &page))
        }
    }
}

/// Create category handler.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    save(&state, None, multipart).await
}

/// Edit category form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Html<String>, AppError> {
    let category = state.api().category(id).await?;
    Ok(render(&CategoryFormTemplate::new(
        &state,
        Some(id),
        CategoryForm::from(&category),
    )))
}

/// Update category handler.
#[instrument(skip(state, multipart))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    save(&state, Some(id), multipart).await
}

/// Delete category handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<CategoryId>) -> Response {
    match state.api().delete_category(id).await {
        Ok(()) => {
            tracing::info!(category_id = %id, "Category deleted");
            Redirect::to("/categories").into_response()
        }
        Err(e) => {
            tracing::error!(category_id = %id, error = %e, "Failed to delete category");
            let message = format!("Could not delete category {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}
