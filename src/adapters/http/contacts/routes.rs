//! Axum router configuration for contact endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{delete_contact, list_contacts, submit_contact};
use crate::adapters::http::state::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
        .route("/contacts/:id", delete(delete_contact))
}
