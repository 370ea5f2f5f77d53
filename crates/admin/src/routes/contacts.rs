//! Contact submissions.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use luxe_core::{Contact, ContactId};
use tracing::instrument;

use crate::{filters, state::AppState};

use super::{api_failure_status, render_with_status};

/// Display format for submission timestamps.
const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Contact row for the list page.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub received: String,
}

impl From<&Contact> for ContactView {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            message: contact.message.clone(),
            received: contact.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Contacts list page template.
#[derive(Template)]
#[template(path = "contacts/index.html")]
pub struct ContactsIndexTemplate {
    pub current_path: &'static str,
    pub contacts: Vec<ContactView>,
    pub error: Option<String>,
}

/// Newest submissions first.
fn newest_first(mut contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    contacts
}

async fn render_index(state: &AppState, status: StatusCode, error: Option<String>) -> Response {
    let (contacts, error) = match state.api().contacts().await {
        Ok(contacts) => (
            newest_first(contacts).iter().map(ContactView::from).collect(),
            error,
        ),
        Err(e) => {
            tracing::error!("Failed to fetch contacts: {e}");
            (Vec::new(), error.or_else(|| Some(e.user_message())))
        }
    };

    render_with_status(
        status,
        &ContactsIndexTemplate {
            current_path: "/contacts",
            contacts,
            error,
        },
    )
}

/// Contacts list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, StatusCode::OK, None).await
}

/// Delete contact handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ContactId>) -> Response {
    match state.api().delete_contact(id).await {
        Ok(()) => {
            tracing::info!(contact_id = %id, "Contact deleted");
            Redirect::to("/contacts").into_response()
        }
        Err(e) => {
            tracing::error!(contact_id = %id, error = %e, "Failed to delete contact");
            let message = format!("Could not delete submission {id}: {}", e.user_message());
            render_index(&state, api_failure_status(&e), Some(message)).await
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn contact(id: i32, day: u32) -> Contact {
        Contact {
            id: ContactId::new(id),
            name: format!("Guest {id}"),
            email: "guest@hotel.ru".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_newest_first() {
        let sorted = newest_first(vec![contact(1, 1), contact(2, 20), contact(3, 7)]);
        let ids: Vec<i32> = sorted.iter().map(|c| c.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_view_formats_date() {
        let view = ContactView::from(&contact(1, 4));
        assert_eq!(view.received, "04.03.2024 09:05");
    }
}
