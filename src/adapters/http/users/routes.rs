//! Axum router configuration for account endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{delete_user, list_users, login, register, update_user_role};
use crate::adapters::http::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/users/:id", put(update_user_role).delete(delete_user))
}
