//! EnsureAdminHandler - Startup bootstrap of the first administrator.
//!
//! Idempotent: creates the account if missing, promotes it if it exists
//! with a lesser role, and otherwise does nothing. An existing account's
//! password is never overwritten.

use std::sync::Arc;

use super::password::hash_password;
use crate::domain::account::{Credentials, NewUser};
use crate::domain::foundation::{Role, ServiceError, UserId};
use crate::ports::{PasswordHasher, UserRepository};

#[derive(Debug, Clone)]
pub struct EnsureAdminCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureAdminOutcome {
    Created(UserId),
    Promoted(UserId),
    AlreadyAdmin(UserId),
}

pub struct EnsureAdminHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl EnsureAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: EnsureAdminCommand) -> Result<EnsureAdminOutcome, ServiceError> {
        let credentials = Credentials::new(cmd.username, cmd.password)?;

        if let Some(existing) = self.users.find_by_username(credentials.username()).await? {
            let id = existing.user.id;
            if existing.user.role.is_admin() {
                tracing::debug!(user_id = %id, "Bootstrap admin already present");
                return Ok(EnsureAdminOutcome::AlreadyAdmin(id));
            }
            self.users.set_role(id, Role::Admin).await?;
            tracing::info!(user_id = %id, "Bootstrap admin promoted");
            return Ok(EnsureAdminOutcome::Promoted(id));
        }

        let password_hash = hash_password(&self.hasher, credentials.password()).await?;
        let user = self
            .users
            .create(&NewUser {
                username: credentials.username().to_string(),
                password_hash,
                role: Role::Admin,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Bootstrap admin created");
        Ok(EnsureAdminOutcome::Created(user.id))
    }
}
