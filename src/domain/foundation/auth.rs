//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is the caller identity resolved from a bearer token.
//! It has no provider dependencies; the `SessionValidator` port fills it in.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(UserId::new(1), "admin", Role::Admin);
//! request.extensions_mut().insert(user);
//! ```

use thiserror::Error;

use super::{Role, ServiceError, UserId};

/// Caller identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Gate for administrative operations.
    pub fn require_admin(&self) -> Result<(), ServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden)
        }
    }

    /// Gate for owner-scoped operations: the caller must be `owner` or an admin.
    pub fn require_owner_or_admin(&self, owner: UserId) -> Result<(), ServiceError> {
        if self.id == owner || self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden)
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Missing, malformed, or badly signed token.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but the account has since been deleted.
    #[error("User not found")]
    UserNotFound,

    /// The user store could not be reached while resolving the caller.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the client should obtain a new token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::UserNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i32) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id), format!("user{}", id), Role::User)
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(1), "admin", Role::Admin)
    }

    #[test]
    fn require_admin_rejects_regular_user() {
        assert_eq!(member(2).require_admin(), Err(ServiceError::Forbidden));
        assert!(admin().require_admin().is_ok());
    }

    #[test]
    fn owner_may_act_on_own_resources() {
        assert!(member(2).require_owner_or_admin(UserId::new(2)).is_ok());
    }

    #[test]
    fn other_user_is_forbidden() {
        assert_eq!(
            member(2).require_owner_or_admin(UserId::new(3)),
            Err(ServiceError::Forbidden)
        );
    }

    #[test]
    fn admin_may_act_for_anyone() {
        assert!(admin().require_owner_or_admin(UserId::new(3)).is_ok());
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::UserNotFound.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }
}
