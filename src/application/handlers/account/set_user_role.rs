//! SetUserRoleHandler - Command handler for an admin changing a user's role.

use std::sync::Arc;

use crate::domain::foundation::{Role, ServiceError, UserId};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct SetUserRoleCommand {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetUserRoleResult {
    pub matched: bool,
}

pub struct SetUserRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SetUserRoleCommand) -> Result<SetUserRoleResult, ServiceError> {
        let matched = self.users.set_role(cmd.user_id, cmd.role).await?;

        if matched {
            tracing::info!(user_id = %cmd.user_id, role = %cmd.role, "User role changed");
        } else {
            tracing::debug!(user_id = %cmd.user_id, "Role change matched no user");
        }
        Ok(SetUserRoleResult { matched })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, InMemoryUserRepository};
    use crate::domain::account::{NewUser, PasswordHash};

    #[tokio::test]
    async fn promotes_user_to_admin() {
        let users = Arc::new(InMemoryUserRepository::new(InMemoryStore::new()));
        let alice = users
            .create(&NewUser {
                username: "alice".to_string(),
                password_hash: PasswordHash::new("x"),
                role: Role::User,
            })
            .await
            .unwrap();

        let result = SetUserRoleHandler::new(users.clone())
            .handle(SetUserRoleCommand {
                user_id: alice.id,
                role: Role::Admin,
            })
            .await
            .unwrap();

        assert!(result.matched);
        assert_eq!(
            users.find_by_id(alice.id).await.unwrap().unwrap().role,
            Role::Admin
        );
    }

    #[tokio::test]
    async fn unknown_user_is_a_silent_success() {
        let users = Arc::new(InMemoryUserRepository::new(InMemoryStore::new()));
        let result = SetUserRoleHandler::new(users)
            .handle(SetUserRoleCommand {
                user_id: UserId::new(404),
                role: Role::User,
            })
            .await
            .unwrap();
        assert!(!result.matched);
    }
}
