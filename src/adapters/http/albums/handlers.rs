//! HTTP handlers for album endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::AlbumRequest;
use crate::adapters::http::error::{json_body, path_id, required, ApiError};
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;
use crate::adapters::http::MessageResponse;
use crate::application::handlers::album::{
    CreateAlbumCommand, DeleteAlbumCommand, UpdateAlbumCommand,
};
use crate::domain::foundation::AlbumId;

/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let albums = state.list_albums_handler().handle().await?;
    Ok(Json(albums))
}

/// POST /albums
pub async fn create_album(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let cmd = CreateAlbumCommand {
        title: required("title", request.title)?,
        artist: required("artist", request.artist)?,
        url: request.url,
        image_url: request.image_url,
    };

    let album = state.create_album_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /albums/:id
pub async fn update_album(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let album_id: AlbumId = path_id("id", &id)?;
    let request = json_body(payload)?;
    let cmd = UpdateAlbumCommand {
        album_id,
        title: required("title", request.title)?,
        artist: required("artist", request.artist)?,
        url: request.url,
        image_url: request.image_url,
    };

    state.update_album_handler().handle(cmd).await?;
    Ok(Json(MessageResponse::new("Album updated successfully")))
}

/// DELETE /albums/:id
pub async fn delete_album(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let album_id: AlbumId = path_id("id", &id)?;

    state
        .delete_album_handler()
        .handle(DeleteAlbumCommand { album_id })
        .await?;
    Ok(Json(MessageResponse::new("Album deleted successfully")))
}
