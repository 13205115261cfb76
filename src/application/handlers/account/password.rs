//! Runs the CPU-bound password hasher off the async executor.

use std::sync::Arc;

use crate::domain::account::PasswordHash;
use crate::domain::foundation::ServiceError;
use crate::ports::PasswordHasher;

pub(super) async fn hash_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
) -> Result<PasswordHash, ServiceError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ServiceError::store(format!("password hashing task failed: {}", e)))?
        .map_err(ServiceError::from)
}

pub(super) async fn verify_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
    hash: PasswordHash,
) -> Result<bool, ServiceError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| ServiceError::store(format!("password verification task failed: {}", e)))?
        .map_err(ServiceError::from)
}
