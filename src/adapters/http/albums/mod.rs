//! HTTP adapter for the album catalog.
//!
//! - `GET /albums` - Public listing
//! - `POST /albums` - Add an album (admin)
//! - `PUT /albums/:id` - Replace an album's fields (admin)
//! - `DELETE /albums/:id` - Remove an album and its favorites (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::album_routes;
