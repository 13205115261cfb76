//! HTTP adapters - REST API for the music catalog.
//!
//! Each resource has its own module with `dto`, `handlers`, and `routes`.
//! `api_router` assembles them behind the bearer-token middleware;
//! `with_http_layers` adds tracing, CORS, and request timeouts for serving.

pub mod albums;
pub mod contacts;
pub mod error;
pub mod favorites;
pub mod middleware;
pub mod state;
pub mod users;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, RequireAdmin, RequireAuth};
pub use state::AppState;

/// `{ "message": ... }` body used by acknowledgement responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Music Backend API"))
}

/// All routes, with the auth middleware applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(albums::album_routes())
        .merge(users::user_routes())
        .merge(contacts::contact_routes())
        .merge(favorites::favorite_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.session_validator.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

/// Wraps a router in the serving layers configured for `server`.
pub fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
