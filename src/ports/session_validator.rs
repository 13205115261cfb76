//! Session validation port for bearer tokens.
//!
//! HTTP middleware hands the raw token to this port and attaches the
//! resulting `AuthenticatedUser` to the request. Implementations must
//! resolve the caller's *current* role from the user store rather than
//! trusting a role baked into the token, so demotions and deletions take
//! effect on the next request.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and resolves the caller.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed or badly signed tokens
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::UserNotFound` when the subject no longer exists
/// - `AuthError::ServiceUnavailable` when the user store fails
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value without the "Bearer " prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
