//! HTTP handlers for favorites endpoints.
//!
//! Both routes are owner-scoped: the caller must be the user named in the
//! request, or an admin.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{ToggleFavoriteRequest, ToggleFavoriteResponse};
use crate::adapters::http::error::{json_body, path_id, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::favorite::{ListFavoritesQuery, ToggleFavoriteCommand};
use crate::domain::favorite::ToggleAction;
use crate::domain::foundation::{AlbumId, ServiceError, UserId};

/// GET /favorites/:userId
pub async fn list_favorites(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = path_id("userId", &user_id)?;
    caller.require_owner_or_admin(user_id)?;

    let album_ids = state
        .list_favorites_handler()
        .handle(ListFavoritesQuery { user_id })
        .await?;
    Ok(Json(album_ids))
}

/// POST /favorites
pub async fn toggle_favorite(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<ToggleFavoriteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let user_id = UserId::new(request.user_id.ok_or_else(|| ServiceError::missing("userId"))?);
    let album_id = AlbumId::new(request.album_id.ok_or_else(|| ServiceError::missing("albumId"))?);
    caller.require_owner_or_admin(user_id)?;

    let result = state
        .toggle_favorite_handler()
        .handle(ToggleFavoriteCommand { user_id, album_id })
        .await?;

    let status = match result.action {
        ToggleAction::Added => StatusCode::CREATED,
        ToggleAction::Removed => StatusCode::OK,
    };
    Ok((status, Json(ToggleFavoriteResponse::from(result.action))))
}
