//! HTTP adapter for accounts.
//!
//! - `POST /register` - Self-service registration (role forced to `user`)
//! - `POST /login` - Credential check, returns the user and a bearer token
//! - `GET /users` - Listing (admin)
//! - `PUT /users/:id` - Change role (admin)
//! - `DELETE /users/:id` - Remove account and its favorites (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::user_routes;
