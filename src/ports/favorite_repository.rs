//! Favorite repository port.
//!
//! The three write-side calls are independent statements; the
//! toggle engine composes them. Implementations must enforce at most one row
//! per (user, album) and report a duplicate insert as
//! `InsertOutcome::AlreadyPresent` instead of an error.

use async_trait::async_trait;

use crate::domain::favorite::{FavoriteKey, InsertOutcome, RemoveOutcome};
use crate::domain::foundation::{AlbumId, DomainError, UserId};

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn exists(&self, key: FavoriteKey) -> Result<bool, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if the user or album does not exist
    /// - `DatabaseError` on any other persistence failure
    async fn insert(&self, key: FavoriteKey) -> Result<InsertOutcome, DomainError>;

    async fn remove(&self, key: FavoriteKey) -> Result<RemoveOutcome, DomainError>;

    /// Album ids favorited by the user. No ordering guarantee.
    async fn album_ids_for_user(&self, user_id: UserId) -> Result<Vec<AlbumId>, DomainError>;
}
