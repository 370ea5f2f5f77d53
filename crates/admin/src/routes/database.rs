//! Database dump and restore.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Response},
};
use luxe_core::DumpInfo;
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

use super::uploads::MultipartForm;
use super::{api_failure_status, render, render_with_status};

/// Database maintenance page template.
#[derive(Template)]
#[template(path = "database.html")]
pub struct DatabaseTemplate {
    pub current_path: &'static str,
    pub dump: Option<DumpInfo>,
    pub restored: Option<String>,
    pub error: Option<String>,
}

impl Default for DatabaseTemplate {
    fn default() -> Self {
        Self {
            current_path: "/database",
            dump: None,
            restored: None,
            error: None,
        }
    }
}

/// Database page handler.
#[instrument]
pub async fn index() -> Html<String> {
    render(&DatabaseTemplate::default())
}

/// Create a dump handler.
#[instrument(skip(state))]
pub async fn dump(State(state): State<AppState>) -> Response {
    match state.api().create_dump().await {
        Ok(dump) => {
            tracing::info!(
                filename = %dump.filename,
                size = dump.size,
                telegram_sent = dump.telegram_sent,
                "Database dump created"
            );
            render_with_status(
                StatusCode::OK,
                &DatabaseTemplate {
                    dump: Some(dump),
                    ..DatabaseTemplate::default()
                },
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Database dump failed");
            render_with_status(
                api_failure_status(&e),
                &DatabaseTemplate {
                    error: Some(format!("Dump failed: {}", e.user_message())),
                    ..DatabaseTemplate::default()
                },
            )
        }
    }
}

/// Restore from an uploaded dump handler.
///
/// Replaces the whole database, so the form must carry the `confirm`
/// checkbox; without it the API is never called.
#[instrument(skip(state, multipart))]
pub async fn restore(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submitted = MultipartForm::read(multipart).await?;
    let rejected = |error: &str| {
        render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            &DatabaseTemplate {
                error: Some(error.to_string()),
                ..DatabaseTemplate::default()
            },
        )
    };

    if !submitted.checked("confirm") {
        return Ok(rejected("Confirm that the current database will be replaced."));
    }
    let Some(file) = submitted.take_files("dump").into_iter().next() else {
        return Ok(rejected("Choose a dump file to restore."));
    };

    tracing::warn!(filename = %file.filename, size = file.data.len(), "Restoring database");
    match state.api().restore_dump(&file.filename, file.data).await {
        Ok(result) => {
            tracing::info!(status = %result.status, "Database restored");
            let message = if result.message.is_empty() {
                format!("Database restored from {}.", file.filename)
            } else {
                result.message
            };
            Ok(render_with_status(
                StatusCode::OK,
                &DatabaseTemplate {
                    restored: Some(message),
                    ..DatabaseTemplate::default()
                },
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Database restore failed");
            Ok(render_with_status(
                api_failure_status(&e),
                &DatabaseTemplate {
                    error: Some(format!("Restore failed: {}", e.user_message())),
                    ..DatabaseTemplate::default()
                },
            ))
        }
    }
}
