//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, roles, caller identity, and the error taxonomy
//! shared by every entity in the catalog.

mod auth;
mod errors;
mod ids;
mod role;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ServiceError, ValidationError};
pub use ids::{AlbumId, ContactId, UserId};
pub use role::Role;
pub use timestamp::Timestamp;
