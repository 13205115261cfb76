//! CreateAlbumHandler - Command handler for adding an album to the catalog.

use std::sync::Arc;

use crate::domain::album::{Album, AlbumDraft};
use crate::domain::foundation::ServiceError;
use crate::ports::AlbumRepository;

#[derive(Debug, Clone)]
pub struct CreateAlbumCommand {
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

pub struct CreateAlbumHandler {
    repository: Arc<dyn AlbumRepository>,
}

impl CreateAlbumHandler {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateAlbumCommand) -> Result<Album, ServiceError> {
        let draft = AlbumDraft::new(cmd.title, cmd.artist, cmd.url, cmd.image_url)?;
        let album = self.repository.create(&draft).await?;

        tracing::info!(album_id = %album.id, title = %album.title, "Album created");
        Ok(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAlbumRepository, InMemoryStore};
    use crate::domain::foundation::{AlbumId, DomainError};
    use async_trait::async_trait;

    fn command(title: &str, artist: &str) -> CreateAlbumCommand {
        CreateAlbumCommand {
            title: title.to_string(),
            artist: artist.to_string(),
            url: Some("https://habibifunkrecords.bandcamp.com/album/x".to_string()),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn creates_album_with_store_assigned_fields() {
        let repo = Arc::new(InMemoryAlbumRepository::new(InMemoryStore::new()));
        let handler = CreateAlbumHandler::new(repo.clone());

        let first = handler.handle(command("Subhana", "Ahmed Ben Ali")).await.unwrap();
        let second = handler.handle(command("Oghneya", "Ferkat Al Ard")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.artist, "Ahmed Ben Ali");
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejects_empty_title_without_touching_store() {
        let repo = Arc::new(InMemoryAlbumRepository::new(InMemoryStore::new()));
        let handler = CreateAlbumHandler::new(repo.clone());

        let err = handler.handle(command("", "Maha")).await.unwrap_err();

        assert_eq!(err, ServiceError::validation("title", "cannot be empty"));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    struct FailingRepository;

    #[async_trait]
    impl AlbumRepository for FailingRepository {
        async fn list_all(&self) -> Result<Vec<Album>, DomainError> {
            Err(DomainError::database("down"))
        }
        async fn create(&self, _draft: &AlbumDraft) -> Result<Album, DomainError> {
            Err(DomainError::database("connection refused"))
        }
        async fn update(&self, _id: AlbumId, _draft: &AlbumDraft) -> Result<bool, DomainError> {
            Err(DomainError::database("down"))
        }
        async fn delete(&self, _id: AlbumId) -> Result<bool, DomainError> {
            Err(DomainError::database("down"))
        }
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_store_error() {
        let handler = CreateAlbumHandler::new(Arc::new(FailingRepository));
        let err = handler.handle(command("Orkos", "Maha")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(msg) if msg.contains("connection refused")));
    }
}
