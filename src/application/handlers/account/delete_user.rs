//! DeleteUserHandler - Command handler for removing an account and its favorites.

use std::sync::Arc;

use crate::domain::foundation::{ServiceError, UserId};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUserResult {
    pub removed: bool,
}

pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<DeleteUserResult, ServiceError> {
        let removed = self.users.delete(cmd.user_id).await?;

        if removed {
            tracing::info!(user_id = %cmd.user_id, "User deleted");
        } else {
            tracing::debug!(user_id = %cmd.user_id, "User delete matched no row");
        }
        Ok(DeleteUserResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAlbumRepository, InMemoryFavoriteRepository, InMemoryStore, InMemoryUserRepository,
    };
    use crate::domain::account::{NewUser, PasswordHash};
    use crate::domain::album::AlbumDraft;
    use crate::domain::favorite::FavoriteKey;
    use crate::domain::foundation::Role;
    use crate::ports::{AlbumRepository, FavoriteRepository};

    #[tokio::test]
    async fn deleting_user_cascades_to_favorites() {
        let store = InMemoryStore::new();
        let users = Arc::new(InMemoryUserRepository::new(store.clone()));
        let albums = InMemoryAlbumRepository::new(store.clone());
        let favorites = InMemoryFavoriteRepository::new(store);

        let alice = users
            .create(&NewUser {
                username: "alice".to_string(),
                password_hash: PasswordHash::new("x"),
                role: Role::User,
            })
            .await
            .unwrap();
        let album = albums
            .create(&AlbumDraft::new("Orkos", "Maha", None, None).unwrap())
            .await
            .unwrap();
        favorites
            .insert(FavoriteKey::new(alice.id, album.id))
            .await
            .unwrap();

        let handler = DeleteUserHandler::new(users.clone());
        let cmd = DeleteUserCommand { user_id: alice.id };
        assert!(handler.handle(cmd).await.unwrap().removed);
        assert!(!handler.handle(cmd).await.unwrap().removed);

        assert!(favorites.album_ids_for_user(alice.id).await.unwrap().is_empty());
        assert!(users.find_by_id(alice.id).await.unwrap().is_none());
    }
}
