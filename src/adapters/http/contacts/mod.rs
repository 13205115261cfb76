//! HTTP adapter for the contact inbox.
//!
//! - `POST /contact` - Anonymous submission
//! - `GET /contacts` - Inbox, newest first (admin)
//! - `DELETE /contacts/:id` - Remove a message (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::contact_routes;
