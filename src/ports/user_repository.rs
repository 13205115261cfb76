//! User repository port.

use async_trait::async_trait;

use crate::domain::account::{NewUser, StoredUser, User};
use crate::domain::foundation::{DomainError, Role, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the username is already taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Look up an account with its password hash, for credential checks.
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Public fields of every account, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrite the role. Returns `false` if no row matched.
    async fn set_role(&self, id: UserId, role: Role) -> Result<bool, DomainError>;

    /// Remove the account and, by cascade, its favorites. Returns `false` if no row matched.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
