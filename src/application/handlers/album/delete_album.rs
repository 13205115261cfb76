//! DeleteAlbumHandler - Command handler for removing an album.
//!
//! Favorites referencing the album are removed with it. Deleting an id that
//! does not exist succeeds, so the operation is idempotent.

use std::sync::Arc;

use crate::domain::foundation::{AlbumId, ServiceError};
use crate::ports::AlbumRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteAlbumCommand {
    pub album_id: AlbumId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAlbumResult {
    pub removed: bool,
}

pub struct DeleteAlbumHandler {
    repository: Arc<dyn AlbumRepository>,
}

impl DeleteAlbumHandler {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAlbumCommand) -> Result<DeleteAlbumResult, ServiceError> {
        let removed = self.repository.delete(cmd.album_id).await?;

        if removed {
            tracing::info!(album_id = %cmd.album_id, "Album deleted");
        } else {
            tracing::debug!(album_id = %cmd.album_id, "Album delete matched no row");
        }
        Ok(DeleteAlbumResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAlbumRepository, InMemoryStore};
    use crate::domain::album::AlbumDraft;

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = Arc::new(InMemoryAlbumRepository::new(InMemoryStore::new()));
        let album = repo
            .create(&AlbumDraft::new("Chant Amazigh", "Majid Soula", None, None).unwrap())
            .await
            .unwrap();
        let handler = DeleteAlbumHandler::new(repo.clone());
        let cmd = DeleteAlbumCommand { album_id: album.id };

        assert!(handler.handle(cmd).await.unwrap().removed);
        assert!(!handler.handle(cmd).await.unwrap().removed);
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
