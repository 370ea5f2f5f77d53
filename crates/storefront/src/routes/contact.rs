//! Contact form route handlers.
//!
//! Submissions are validated locally and stored through the catalog API's
//! `POST /contacts`. An invalid form never reaches the API.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use luxe_core::forms::ContactForm;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: String,
    pub form: ContactForm,
    pub success: bool,
    pub error: Option<String>,
}

impl ContactTemplate {
    fn new(form: ContactForm) -> Self {
        Self {
            current_path: "/contact".to_string(),
            form,
            success: false,
            error: None,
        }
    }
}

/// Display the contact form.
#[instrument]
pub async fn show() -> ContactTemplate {
    ContactTemplate::new(ContactForm::default())
}

/// Validate and submit the contact form.
///
/// On success the form is cleared and a confirmation shown; on failure the
/// visitor's input is kept alongside the error.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<ContactForm>) -> impl IntoResponse {
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            let mut page = ContactTemplate::new(form);
            page.error = Some(format!("Please check the form: {e}."));
            return (StatusCode::UNPROCESSABLE_ENTITY, page);
        }
    };

    match state.api().submit_contact(&input).await {
        Ok(contact) => {
            tracing::info!(contact_id = %contact.id, "Contact message stored");
            let mut page = ContactTemplate::new(ContactForm::default());
            page.success = true;
            (StatusCode::OK, page)
        }
        Err(e) => {
            tracing::error!("Failed to submit contact form: {e}");
            let mut page = ContactTemplate::new(form);
            page.error =
                Some("We could not send your message. Please try again later.".to_string());
            (StatusCode::BAD_GATEWAY, page)
        }
    }
}
