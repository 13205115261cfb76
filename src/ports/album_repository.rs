//! Album repository port.
//!
//! # Missing-id policy
//!
//! `update` and `delete` report whether a row was affected but never fail
//! on a missing id. Callers treat zero affected rows as success.

use async_trait::async_trait;

use crate::domain::album::{Album, AlbumDraft};
use crate::domain::foundation::{AlbumId, DomainError};

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Album>, DomainError>;

    /// Insert a new album; the store assigns `id` and `created_at`.
    async fn create(&self, draft: &AlbumDraft) -> Result<Album, DomainError>;

    /// Replace all four mutable fields. Returns `false` if no row matched.
    async fn update(&self, id: AlbumId, draft: &AlbumDraft) -> Result<bool, DomainError>;

    /// Remove the album and, by cascade, its favorites. Returns `false` if no row matched.
    async fn delete(&self, id: AlbumId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AlbumRepository) {}
    }
}
