//! In-memory implementation of FavoriteRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::favorite::{FavoriteKey, InsertOutcome, RemoveOutcome};
use crate::domain::foundation::{AlbumId, DomainError, ErrorCode, UserId};
use crate::ports::FavoriteRepository;

#[derive(Clone)]
pub struct InMemoryFavoriteRepository {
    store: InMemoryStore,
}

impl InMemoryFavoriteRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn exists(&self, key: FavoriteKey) -> Result<bool, DomainError> {
        Ok(self.store.lock()?.favorites.contains(&key))
    }

    async fn insert(&self, key: FavoriteKey) -> Result<InsertOutcome, DomainError> {
        let mut tables = self.store.lock()?;
        if !tables.users.contains_key(&key.user_id) || !tables.albums.contains_key(&key.album_id) {
            return Err(DomainError::new(ErrorCode::NotFound, "User or album not found")
                .with_detail("favorite", key.to_string()));
        }
        Ok(if tables.favorites.insert(key) {
            InsertOutcome::Inserted
        } else {
            InsertOutcome::AlreadyPresent
        })
    }

    async fn remove(&self, key: FavoriteKey) -> Result<RemoveOutcome, DomainError> {
        Ok(if self.store.lock()?.favorites.remove(&key) {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::AlreadyAbsent
        })
    }

    async fn album_ids_for_user(&self, user_id: UserId) -> Result<Vec<AlbumId>, DomainError> {
        Ok(self
            .store
            .lock()?
            .favorites
            .iter()
            .filter(|key| key.user_id == user_id)
            .map(|key| key.album_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAlbumRepository, InMemoryUserRepository};
    use crate::domain::account::{NewUser, PasswordHash};
    use crate::domain::album::AlbumDraft;
    use crate::domain::foundation::Role;
    use crate::ports::{AlbumRepository, UserRepository};

    async fn seeded() -> (InMemoryStore, FavoriteKey) {
        let store = InMemoryStore::new();
        let user = InMemoryUserRepository::new(store.clone())
            .create(&NewUser {
                username: "alice".to_string(),
                password_hash: PasswordHash::new("x"),
                role: Role::User,
            })
            .await
            .unwrap();
        let album = InMemoryAlbumRepository::new(store.clone())
            .create(&AlbumDraft::new("Orkos", "Maha", None, None).unwrap())
            .await
            .unwrap();
        (store, FavoriteKey::new(user.id, album.id))
    }

    #[tokio::test]
    async fn duplicate_insert_reports_already_present() {
        let (store, key) = seeded().await;
        let repo = InMemoryFavoriteRepository::new(store);

        assert_eq!(repo.insert(key).await.unwrap(), InsertOutcome::Inserted);
        assert_eq!(repo.insert(key).await.unwrap(), InsertOutcome::AlreadyPresent);
        assert_eq!(repo.album_ids_for_user(key.user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removing_absent_row_reports_already_absent() {
        let (store, key) = seeded().await;
        let repo = InMemoryFavoriteRepository::new(store);
        assert_eq!(repo.remove(key).await.unwrap(), RemoveOutcome::AlreadyAbsent);
    }

    #[tokio::test]
    async fn dangling_reference_is_not_found() {
        let (store, key) = seeded().await;
        let repo = InMemoryFavoriteRepository::new(store);

        let err = repo
            .insert(FavoriteKey::new(key.user_id, AlbumId::new(77)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn deleting_album_cascades() {
        let (store, key) = seeded().await;
        let repo = InMemoryFavoriteRepository::new(store.clone());
        repo.insert(key).await.unwrap();

        InMemoryAlbumRepository::new(store)
            .delete(key.album_id)
            .await
            .unwrap();

        assert!(repo.album_ids_for_user(key.user_id).await.unwrap().is_empty());
    }
}
