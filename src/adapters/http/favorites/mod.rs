//! HTTP adapter for favorites.
//!
//! - `GET /favorites/:userId` - Album ids the user has favorited (owner or admin)
//! - `POST /favorites` - Toggle a favorite (owner or admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::favorite_routes;
