//! In-memory implementation of UserRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::account::{NewUser, StoredUser, User};
use crate::domain::foundation::{DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.store.lock()?;
        if tables
            .users
            .values()
            .any(|existing| existing.user.username == user.username)
        {
            return Err(DomainError::new(ErrorCode::Conflict, "Username already taken")
                .with_detail("username", user.username.clone()));
        }

        let id = tables.next_user_id();
        let created = User {
            id,
            username: user.username.clone(),
            role: user.role,
            created_at: Timestamp::now(),
        };
        tables.users.insert(
            id,
            StoredUser {
                user: created.clone(),
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, DomainError> {
        Ok(self
            .store
            .lock()?
            .users
            .values()
            .find(|stored| stored.user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.store.lock()?.users.get(&id).map(|s| s.user.clone()))
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self
            .store
            .lock()?
            .users
            .values()
            .map(|s| s.user.clone())
            .collect())
    }

    async fn set_role(&self, id: UserId, role: Role) -> Result<bool, DomainError> {
        let mut tables = self.store.lock()?;
        match tables.users.get_mut(&id) {
            Some(stored) => {
                stored.user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut tables = self.store.lock()?;
        let removed = tables.users.remove(&id).is_some();
        tables.favorites.retain(|key| key.user_id != id);
        Ok(removed)
    }
}
