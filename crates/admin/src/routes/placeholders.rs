//! "Coming soon" placeholder management.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use luxe_core::{Placeholder, PlaceholderId, PlaceholderInput, forms::PlaceholderForm};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

use super::{api_failure_status, render, render_with_status};

/// Placeholders list page template.
#[derive(Template)]
#[template(path = "placeholders/index.html")]
pub struct PlaceholdersIndexTemplate {
    pub current_path: &'static str,
    pub placeholders: Vec<Placeholder>,
    pub error: Option<String>,
}

/// Placeholder create/edit form template.
#[derive(Template)]
#[template(path = "placeholders/form.html")]
pub struct PlaceholderFormTemplate {
    pub current_path: &'static str,
    pub placeholder_id: Option<PlaceholderId>,
    pub form: PlaceholderForm,
    pub error: Option<String>,
}

impl PlaceholderFormTemplate {
    const fn new(
        placeholder_id: Option<PlaceholderId>,
        form: PlaceholderForm,
        error: Option<String>,
    ) -> Self {
        Self {
            current_path: "/placeholders",
            placeholder_id,
            form,
            error,
        }
    }
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (placeholders, error) = match state.api().placeholders().await {
        Ok(mut placeholders) => {
            placeholders.sort_by(|a, b| a.path.cmp(&b.path));
            (placeholders, error)
        }
        Err(e) => {
            tracing::error!("Failed to fetch placeholders: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &PlaceholdersIndexTemplate {
            current_path: "/placeholders",
            placeholders,
            error,
        },
    )
}

/// Placeholders list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// New placeholder form, pre-filled as active with the standard texts.
#[instrument]
pub async fn new_placeholder() -> Html<String> {
    render(&PlaceholderFormTemplate::new(
        None,
        PlaceholderForm::default(),
        None,
    ))
}

async fn save(
    state: &AppState,
    placeholder_id: Option<PlaceholderId>,
    form: PlaceholderForm,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            let page = PlaceholderFormTemplate::new(placeholder_id, form, Some(e.to_string()));
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let result = match placeholder_id {
        Some(id) => state.api().update_placeholder(id, &input).await,
        None => state.api().create_placeholder(&input).await,
    };

    match result {
        Ok(placeholder) => {
            tracing::info!(
                placeholder_id = %placeholder.id,
                path = %placeholder.path,
                active = placeholder.is_active,
                "Placeholder saved"
            );
            Redirect::to("/placeholders").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save placeholder");
            let page = PlaceholderFormTemplate::new(placeholder_id, form, Some(e.user_message()));
            render_with_status(api_failure_status(&e), &page)
        }
    }
}

/// Create placeholder handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<PlaceholderForm>,
) -> Response {
    save(&state, None, form).await
}

/// Edit placeholder form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<PlaceholderId>,
) -> Result<Html<String>, AppError> {
    let placeholder = state.api().placeholder(id).await?;
    Ok(render(&PlaceholderFormTemplate::new(
        Some(id),
        PlaceholderForm::from(&placeholder),
        None,
    )))
}

/// Update placeholder handler.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<PlaceholderId>,
    Form(form): Form<PlaceholderForm>,
) -> Response {
    save(&state, Some(id), form).await
}

/// Flip a placeholder between active and inactive.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>, Path(id): Path<PlaceholderId>) -> Response {
    let result = async {
        let current = state.api().placeholder(id).await?;
        let mut input = PlaceholderInput::from(&current);
        input.is_active = !current.is_active;
        state.api().update_placeholder(id, &input).await
    }
    .await;

    match result {
        Ok(placeholder) => {
            tracing::info!(placeholder_id = %id, active = placeholder.is_active, "Placeholder toggled");
            Redirect::to("/placeholders").into_response()
        }
        Err(e) => {
            tracing::error!(placeholder_id = %id, error = %e, "Failed to toggle placeholder");
            let message = format!("Could not update placeholder {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}

/// Delete placeholder handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<PlaceholderId>) -> Response {
    match state.api().delete_placeholder(id).await {
        Ok(()) => {
            tracing::info!(placeholder_id = %id, "Placeholder deleted");
            Redirect::to("/placeholders").into_response()
        }
        Err(e) => {
            tracing::error!(placeholder_id = %id, error = %e, "Failed to delete placeholder");
            let message = format!("Could not delete placeholder {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}
