//! RegisterUserHandler - Command handler for creating an account.
//!
//! New accounts always get the `user` role; only an admin can promote.

use std::sync::Arc;

use super::password::hash_password;
use crate::domain::account::{Credentials, NewUser, User};
use crate::domain::foundation::{Role, ServiceError};
use crate::ports::{PasswordHasher, UserRepository};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, ServiceError> {
        // 1. Validate input
        let credentials = Credentials::new(cmd.username, cmd.password)?;

        // 2. Cheap pre-check; the unique index is the real guard
        if self
            .users
            .find_by_username(credentials.username())
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        // 3. Hash and persist
        let password_hash = hash_password(&self.hasher, credentials.password()).await?;
        let user = self
            .users
            .create(&NewUser {
                username: credentials.username().to_string(),
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }
}
