//! In-memory implementation of AlbumRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::album::{Album, AlbumDraft};
use crate::domain::foundation::{AlbumId, DomainError, Timestamp};
use crate::ports::AlbumRepository;

#[derive(Clone)]
pub struct InMemoryAlbumRepository {
    store: InMemoryStore,
}

impl InMemoryAlbumRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list_all(&self) -> Result<Vec<Album>, DomainError> {
        Ok(self.store.lock()?.albums.values().cloned().collect())
    }

    async fn create(&self, draft: &AlbumDraft) -> Result<Album, DomainError> {
        let mut tables = self.store.lock()?;
        let id = tables.next_album_id();
        let album = draft.clone().into_album(id, Timestamp::now());
        tables.albums.insert(id, album.clone());
        Ok(album)
    }

    async fn update(&self, id: AlbumId, draft: &AlbumDraft) -> Result<bool, DomainError> {
        let mut tables = self.store.lock()?;
        match tables.albums.get_mut(&id) {
            Some(album) => {
                *album = draft.clone().into_album(id, album.created_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AlbumId) -> Result<bool, DomainError> {
        let mut tables = self.store.lock()?;
        let removed = tables.albums.remove(&id).is_some();
        tables.favorites.retain(|key| key.album_id != id);
        Ok(removed)
    }
}
