//! ListUsersHandler - Query handler for the admin user listing.

use std::sync::Arc;

use crate::domain::account::User;
use crate::domain::foundation::ServiceError;
use crate::ports::UserRepository;

pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryStore, InMemoryUserRepository};
    use crate::domain::account::{NewUser, PasswordHash};
    use crate::domain::foundation::Role;

    #[tokio::test]
    async fn lists_public_fields_in_id_order() {
        let users = Arc::new(InMemoryUserRepository::new(InMemoryStore::new()));
        for name in ["carol", "alice", "bob"] {
            users
                .create(&NewUser {
                    username: name.to_string(),
                    password_hash: PasswordHash::new("x"),
                    role: Role::User,
                })
                .await
                .unwrap();
        }

        let listed = ListUsersHandler::new(users).handle().await.unwrap();

        let names: Vec<_> = listed.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
        let json = serde_json::to_string(&listed).unwrap();
        assert!(!json.contains("password"));
    }
}
