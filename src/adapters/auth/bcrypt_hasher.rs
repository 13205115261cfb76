//! bcrypt implementation of PasswordHasher.

use crate::domain::account::PasswordHash;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, DomainError> {
        bcrypt::hash(password, self.cost)
            .map(PasswordHash::new)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to hash password: {}", e),
                )
            })
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash.as_str()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to verify password: {}", e),
            )
        })
    }
}
