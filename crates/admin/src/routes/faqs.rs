//! FAQ management route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use luxe_core::{Faq, FaqId, forms::FaqForm};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

use super::{api_failure_status, render, render_with_status};

/// FAQs list page template.
#[derive(Template)]
#[template(path = "faqs/index.html")]
pub struct FaqsIndexTemplate {
    pub current_path: &'static str,
    pub faqs: Vec<Faq>,
    pub error: Option<String>,
}

/// FAQ create/edit form template.
#[derive(Template)]
#[template(path = "faqs/form.html")]
pub struct FaqFormTemplate {
    pub current_path: &'static str,
    pub faq_id: Option<FaqId>,
    pub form: FaqForm,
    pub error: Option<String>,
}

impl FaqFormTemplate {
    const fn new(faq_id: Option<FaqId>, form: FaqForm, error: Option<String>) -> Self {
        Self {
            current_path: "/faqs",
            faq_id,
            form,
            error,
        }
    }
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (faqs, error) = match state.api().faqs().await {
        Ok(faqs) => (Faq::ordered(faqs), error),
        Err(e) => {
            tracing::error!("Failed to fetch FAQs: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &FaqsIndexTemplate {
            current_path: "/faqs",
            faqs,
            error,
        },
    )
}

/// FAQs list page handler, in display order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// New FAQ form handler.
#[instrument]
pub async fn new_faq() -> Html<String> {
    render(&FaqFormTemplate::new(None, FaqForm::default(), None))
}

async fn save(state: &AppState, faq_id: Option<FaqId>, form: FaqForm) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            let page = FaqFormTemplate::new(faq_id, form, Some(e.to_string()));
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let result = match faq_id {
        Some(id) => state.api().update_faq(id, &input).await,
        None => state.api().create_faq(&input).await,
    };

    match result {
        Ok(faq) => {
            tracing::info!(faq_id = %faq.id, "FAQ saved");
            Redirect::to("/faqs").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save FAQ");
            let page = FaqFormTemplate::new(faq_id, form, Some(e.user_message()));
            render_with_status(api_failure_status(&e), &page)
        }
    }
}

/// Create FAQ handler.
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<FaqForm>) -> Response {
    save(&state, None, form).await
}

/// Edit FAQ form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<FaqId>,
) -> Result<Html<String>, AppError> {
    let faq = state.api().faq(id).await?;
    Ok(render(&FaqFormTemplate::new(
        Some(id),
        FaqForm::from(&faq),
        None,
    )))
}

/// Update FAQ handler.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<FaqId>,
    Form(form): Form<FaqForm>,
) -> Response {
    save(&state, Some(id), form).await
}

/// Delete FAQ handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<FaqId>) -> Response {
    match state.api().delete_faq(id).await {
        Ok(()) => {
            tracing::info!(faq_id = %id, "FAQ deleted");
            Redirect::to("/faqs").into_response()
        }
        Err(e) => {
            tracing::error!(faq_id = %id, error = %e, "Failed to delete FAQ");
            let message = format!("Could not delete FAQ {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}
