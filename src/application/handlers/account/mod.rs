//! Account command and query handlers: registration, login, administration.

mod delete_user;
mod ensure_admin;
mod list_users;
mod login;
mod password;
mod register_user;
mod set_user_role;

pub use delete_user::{DeleteUserCommand, DeleteUserHandler, DeleteUserResult};
pub use ensure_admin::{EnsureAdminCommand, EnsureAdminHandler, EnsureAdminOutcome};
pub use list_users::ListUsersHandler;
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use set_user_role::{SetUserRoleCommand, SetUserRoleHandler, SetUserRoleResult};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::account::PasswordHash;
    use crate::domain::foundation::DomainError;
    use crate::ports::PasswordHasher;

    /// Reversible stand-in for bcrypt so tests stay fast.
    pub struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<PasswordHash, DomainError> {
            Ok(PasswordHash::new(format!("plain:{}", password)))
        }

        fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, DomainError> {
            Ok(hash.as_str() == format!("plain:{}", password))
        }
    }
}
