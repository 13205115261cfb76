//! Axum router configuration for favorites endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_favorites, toggle_favorite};
use crate::adapters::http::state::AppState;

pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(toggle_favorite))
        .route("/favorites/:user_id", get(list_favorites))
}
