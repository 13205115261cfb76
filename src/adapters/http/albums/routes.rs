//! Axum router configuration for album endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{create_album, delete_album, list_albums, update_album};
use crate::adapters::http::state::AppState;

pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/:id", put(update_album).delete(delete_album))
}
