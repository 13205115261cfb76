//! User account types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Role, Timestamp, UserId, ValidationError};

/// Public projection of a user account.
///
/// Carries no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// A salted one-way password hash as persisted in the `password` column.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

/// A user row including its password hash. Only the auth path sees this.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: PasswordHash,
}

/// Insert model for a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: PasswordHash,
    pub role: Role,
}

/// bcrypt reads only this many bytes of a password, so longer ones are refused
/// rather than silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// A username/password pair as submitted by a client.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// - `EmptyField` if either half is blank
    /// - `InvalidFormat` if the password exceeds `MAX_PASSWORD_BYTES`
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = ValidationError::non_empty("username", username)?;
        let password = ValidationError::non_empty("password", password)?;
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }
        Ok(Self {
            username: username.trim().to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_has_no_password() {
        let user = User {
            id: UserId::new(1),
            username: "alice".to_string(),
            role: Role::User,
            created_at: Timestamp::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn credentials_trim_username_but_not_password() {
        let creds = Credentials::new(" alice ", " p ").unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password(), " p ");
    }

    #[test]
    fn credentials_reject_missing_halves() {
        assert_eq!(
            Credentials::new("", "p").unwrap_err(),
            ValidationError::empty_field("username")
        );
        assert_eq!(
            Credentials::new("alice", "").unwrap_err(),
            ValidationError::empty_field("password")
        );
    }

    #[test]
    fn credentials_reject_passwords_bcrypt_would_truncate() {
        assert!(Credentials::new("alice", "x".repeat(MAX_PASSWORD_BYTES)).is_ok());

        let err = Credentials::new("alice", "x".repeat(MAX_PASSWORD_BYTES + 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("password", "must be at most 72 bytes")
        );

        // 24 three-byte characters fit exactly; one more does not.
        assert!(Credentials::new("alice", "\u{266B}".repeat(24)).is_ok());
        assert!(Credentials::new("alice", "\u{266B}".repeat(25)).is_err());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = Credentials::new("alice", "hunter2").unwrap();
        assert!(!format!("{:?}", creds).contains("hunter2"));

        let hash = PasswordHash::new("$2b$04$abcdef");
        assert!(!format!("{:?}", hash).contains("abcdef"));
    }
}
