//! Password hashing port.
//!
//! Hashing is CPU-bound; callers run it off the async executor.

use crate::domain::account::PasswordHash;
use crate::domain::foundation::DomainError;

pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way hash.
    fn hash(&self, password: &str) -> Result<PasswordHash, DomainError>;

    /// Check `password` against `hash`. `Ok(false)` on mismatch.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, DomainError>;
}
