//! LoginHandler - Verifies credentials and issues a bearer token.
//!
//! Unknown username and wrong password fail identically.

use std::sync::Arc;

use super::password::verify_password;
use crate::domain::account::{Credentials, User};
use crate::domain::foundation::ServiceError;
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: IssuedToken,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, ServiceError> {
        let credentials = Credentials::new(cmd.username, cmd.password)?;

        let Some(stored) = self.users.find_by_username(credentials.username()).await? else {
            tracing::debug!(username = %credentials.username(), "Login for unknown user");
            return Err(ServiceError::Unauthorized);
        };

        if !verify_password(&self.hasher, credentials.password(), stored.password_hash).await? {
            tracing::debug!(user_id = %stored.user.id, "Login with wrong password");
            return Err(ServiceError::Unauthorized);
        }

        let token = self.tokens.issue(&stored.user)?;
        tracing::info!(user_id = %stored.user.id, "User logged in");

        Ok(LoginResult {
            user: stored.user,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, InMemoryUserRepository};
    use crate::application::handlers::account::test_support::PlainHasher;
    use crate::domain::account::{NewUser, PasswordHash};
    use crate::domain::foundation::{DomainError, Role, Timestamp};

    struct StaticIssuer;

    impl TokenIssuer for StaticIssuer {
        fn issue(&self, user: &User) -> Result<IssuedToken, DomainError> {
            Ok(IssuedToken {
                token: format!("token-for-{}", user.id),
                expires_at: Timestamp::now(),
            })
        }
    }

    async fn handler_with_alice() -> LoginHandler {
        let users = Arc::new(InMemoryUserRepository::new(InMemoryStore::new()));
        users
            .create(&NewUser {
                username: "alice".to_string(),
                password_hash: PasswordHash::new("plain:p1"),
                role: Role::User,
            })
            .await
            .unwrap();
        LoginHandler::new(users, Arc::new(PlainHasher), Arc::new(StaticIssuer))
    }

    fn command(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn correct_password_returns_user_and_token() {
        let handler = handler_with_alice().await;

        let result = handler.handle(command("alice", "p1")).await.unwrap();

        assert_eq!(result.user.username, "alice");
        assert_eq!(result.token.token, format!("token-for-{}", result.user.id));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_the_same_way() {
        let handler = handler_with_alice().await;

        let wrong = handler.handle(command("alice", "nope")).await.unwrap_err();
        let unknown = handler.handle(command("mallory", "p1")).await.unwrap_err();

        assert_eq!(wrong, ServiceError::Unauthorized);
        assert_eq!(unknown, ServiceError::Unauthorized);
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn blank_username_is_validation_error() {
        let handler = handler_with_alice().await;
        let err = handler.handle(command("  ", "p1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::ValidationFailed { .. }));
    }
}
