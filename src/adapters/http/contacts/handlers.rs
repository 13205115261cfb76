//! HTTP handlers for contact endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::ContactRequest;
use crate::adapters::http::error::{json_body, path_id, required, ApiError};
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;
use crate::adapters::http::MessageResponse;
use crate::application::handlers::contact::{DeleteContactCommand, SubmitContactCommand};
use crate::domain::foundation::ContactId;

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let cmd = SubmitContactCommand {
        name: required("name", request.name)?,
        email: required("email", request.email)?,
        message: required("message", request.message)?,
    };

    let contact = state.submit_contact_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let contacts = state.list_contacts_handler().handle().await?;
    Ok(Json(contacts))
}

/// DELETE /contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact_id: ContactId = path_id("id", &id)?;

    state
        .delete_contact_handler()
        .handle(DeleteContactCommand { contact_id })
        .await?;
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
