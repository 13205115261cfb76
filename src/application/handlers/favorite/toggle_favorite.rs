//! ToggleFavoriteHandler - The favorites toggle engine.
//!
//! Read-then-act with no surrounding transaction:
//!
//! 1. Ask the store whether `(user, album)` is favorited
//! 2. Decide the opposite transition
//! 3. Apply it, accepting a lost race as success
//!
//! The unique index on `(user_id, album_id)` guarantees there is never more
//! than one row per pair. A racing insert that hits it reports
//! `AlreadyPresent` and a racing delete that finds nothing reports
//! `AlreadyAbsent`; both still answer with the decided action.

use std::sync::Arc;

use crate::domain::favorite::{FavoriteKey, InsertOutcome, RemoveOutcome, ToggleAction};
use crate::domain::foundation::{AlbumId, ServiceError, UserId};
use crate::ports::FavoriteRepository;

#[derive(Debug, Clone, Copy)]
pub struct ToggleFavoriteCommand {
    pub user_id: UserId,
    pub album_id: AlbumId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleFavoriteResult {
    pub action: ToggleAction,
    /// False when a concurrent toggle had already applied the same transition.
    pub applied: bool,
}

pub struct ToggleFavoriteHandler {
    favorites: Arc<dyn FavoriteRepository>,
}

impl ToggleFavoriteHandler {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }

    pub async fn handle(
        &self,
        cmd: ToggleFavoriteCommand,
    ) -> Result<ToggleFavoriteResult, ServiceError> {
        let key = FavoriteKey::new(cmd.user_id, cmd.album_id);

        let action = ToggleAction::decide(self.favorites.exists(key).await?);

        let applied = match action {
            ToggleAction::Added => match self.favorites.insert(key).await? {
                InsertOutcome::Inserted => true,
                InsertOutcome::AlreadyPresent => false,
            },
            ToggleAction::Removed => match self.favorites.remove(key).await? {
                RemoveOutcome::Removed => true,
                RemoveOutcome::AlreadyAbsent => false,
            },
        };

        if applied {
            tracing::info!(%key, %action, "Favorite toggled");
        } else {
            tracing::debug!(%key, %action, "Favorite toggle lost a race; treated as applied");
        }

        Ok(ToggleFavoriteResult { action, applied })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAlbumRepository, InMemoryFavoriteRepository, InMemoryStore, InMemoryUserRepository,
    };
    use crate::application::handlers::favorite::{ListFavoritesHandler, ListFavoritesQuery};
    use crate::domain::account::{NewUser, PasswordHash};
    use crate::domain::album::AlbumDraft;
    use crate::domain::foundation::{DomainError, ErrorCode, Role};
    use crate::ports::{AlbumRepository, UserRepository};
    use async_trait::async_trait;
    use proptest::prelude::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Fixtures
    // ════════════════════════════════════════════════════════════════════════════

    struct Fixture {
        favorites: Arc<InMemoryFavoriteRepository>,
        user_id: UserId,
        album_id: AlbumId,
    }

    async fn fixture() -> Fixture {
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
            .create(&AlbumDraft::new("Hawalat", "Charif Megarbane", None, None).unwrap())
            .await
            .unwrap();
        Fixture {
            favorites: Arc::new(InMemoryFavoriteRepository::new(store)),
            user_id: user.id,
            album_id: album.id,
        }
    }

    impl Fixture {
        fn handler(&self) -> ToggleFavoriteHandler {
            ToggleFavoriteHandler::new(self.favorites.clone())
        }

        fn command(&self) -> ToggleFavoriteCommand {
            ToggleFavoriteCommand {
                user_id: self.user_id,
                album_id: self.album_id,
            }
        }

        async fn favorited(&self) -> bool {
            self.favorites
                .exists(FavoriteKey::new(self.user_id, self.album_id))
                .await
                .unwrap()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Sequential behavior
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn first_toggle_adds_second_removes() {
        let fx = fixture().await;
        let handler = fx.handler();

        let first = handler.handle(fx.command()).await.unwrap();
        assert_eq!(first.action, ToggleAction::Added);
        assert!(first.applied);
        assert!(fx.favorited().await);

        let second = handler.handle(fx.command()).await.unwrap();
        assert_eq!(second.action, ToggleAction::Removed);
        assert!(!fx.favorited().await);
    }

    #[tokio::test]
    async fn toggled_album_appears_in_listing() {
        let fx = fixture().await;
        fx.handler().handle(fx.command()).await.unwrap();

        let ids = ListFavoritesHandler::new(fx.favorites.clone())
            .handle(ListFavoritesQuery {
                user_id: fx.user_id,
            })
            .await
            .unwrap();

        assert_eq!(ids, vec![fx.album_id]);
    }

    #[tokio::test]
    async fn unknown_album_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .handler()
            .handle(ToggleFavoriteCommand {
                user_id: fx.user_id,
                album_id: AlbumId::new(9999),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    proptest! {
        #[test]
        fn final_state_matches_parity_of_sequential_toggles(n in 0usize..12) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let fx = fixture().await;
                let handler = fx.handler();
                for _ in 0..n {
                    handler.handle(fx.command()).await.unwrap();
                }
                prop_assert_eq!(fx.favorited().await, n % 2 == 1);
                Ok::<(), TestCaseError>(())
            })?;
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Races
    // ════════════════════════════════════════════════════════════════════════════

    /// Reports a fixed `exists` answer regardless of the real state, which
    /// reproduces both halves of a read-then-act race deterministically.
    struct StaleReads {
        inner: Arc<InMemoryFavoriteRepository>,
        observed: bool,
    }

    #[async_trait]
    impl FavoriteRepository for StaleReads {
        async fn exists(&self, _key: FavoriteKey) -> Result<bool, DomainError> {
            Ok(self.observed)
        }
        async fn insert(&self, key: FavoriteKey) -> Result<InsertOutcome, DomainError> {
            self.inner.insert(key).await
        }
        async fn remove(&self, key: FavoriteKey) -> Result<RemoveOutcome, DomainError> {
            self.inner.remove(key).await
        }
        async fn album_ids_for_user(&self, user_id: UserId) -> Result<Vec<AlbumId>, DomainError> {
            self.inner.album_ids_for_user(user_id).await
        }
    }

    #[tokio::test]
    async fn losing_add_race_is_success_without_duplicate() {
        let fx = fixture().await;
        let handler = ToggleFavoriteHandler::new(Arc::new(StaleReads {
            inner: fx.favorites.clone(),
            observed: false,
        }));

        let winner = handler.handle(fx.command()).await.unwrap();
        let loser = handler.handle(fx.command()).await.unwrap();

        assert_eq!(winner.action, ToggleAction::Added);
        assert!(winner.applied);
        assert_eq!(loser.action, ToggleAction::Added);
        assert!(!loser.applied);
        assert_eq!(
            fx.favorites.album_ids_for_user(fx.user_id).await.unwrap(),
            vec![fx.album_id]
        );
    }

    #[tokio::test]
    async fn losing_remove_race_is_success() {
        let fx = fixture().await;
        fx.handler().handle(fx.command()).await.unwrap();
        let handler = ToggleFavoriteHandler::new(Arc::new(StaleReads {
            inner: fx.favorites.clone(),
            observed: true,
        }));

        let winner = handler.handle(fx.command()).await.unwrap();
        let loser = handler.handle(fx.command()).await.unwrap();

        assert!(winner.applied);
        assert_eq!(loser.action, ToggleAction::Removed);
        assert!(!loser.applied);
        assert!(!fx.favorited().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_never_duplicate_the_row() {
        let fx = fixture().await;
        let handler = Arc::new(fx.handler());

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let handler = handler.clone();
                let cmd = fx.command();
                tokio::spawn(async move { handler.handle(cmd).await })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            assert!(result.unwrap().is_ok());
        }
        assert!(fx.favorites.album_ids_for_user(fx.user_id).await.unwrap().len() <= 1);
    }

    struct Unavailable;

    #[async_trait]
    impl FavoriteRepository for Unavailable {
        async fn exists(&self, _key: FavoriteKey) -> Result<bool, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
        }
        async fn insert(&self, _key: FavoriteKey) -> Result<InsertOutcome, DomainError> {
            unreachable!("insert must not run after a failed read")
        }
        async fn remove(&self, _key: FavoriteKey) -> Result<RemoveOutcome, DomainError> {
            unreachable!("remove must not run after a failed read")
        }
        async fn album_ids_for_user(&self, _user_id: UserId) -> Result<Vec<AlbumId>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn store_failure_on_read_aborts_the_toggle() {
        let handler = ToggleFavoriteHandler::new(Arc::new(Unavailable));
        let err = handler
            .handle(ToggleFavoriteCommand {
                user_id: UserId::new(1),
                album_id: AlbumId::new(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
    }
}
