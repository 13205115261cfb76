//! PostgreSQL implementation of FavoriteRepository.
//!
//! The `favorites_user_album_key` unique constraint is what keeps concurrent
//! toggles from duplicating a row; a violation here is an expected outcome.

use async_trait::async_trait;
use sqlx::PgPool;

use super::gateway::{db_error, StoreFailure};
use crate::domain::favorite::{FavoriteKey, InsertOutcome, RemoveOutcome};
use crate::domain::foundation::{AlbumId, DomainError, ErrorCode, UserId};
use crate::ports::FavoriteRepository;

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn exists(&self, key: FavoriteKey) -> Result<bool, DomainError> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND album_id = $2)",
        )
        .bind(key.user_id.as_i32())
        .bind(key.album_id.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check favorite"))?;

        Ok(found)
    }

    async fn insert(&self, key: FavoriteKey) -> Result<InsertOutcome, DomainError> {
        let result = sqlx::query("INSERT INTO favorites (user_id, album_id) VALUES ($1, $2)")
            .bind(key.user_id.as_i32())
            .bind(key.album_id.as_i32())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => match StoreFailure::classify(e) {
                StoreFailure::UniqueViolation => Ok(InsertOutcome::AlreadyPresent),
                StoreFailure::ForeignKeyViolation => Err(DomainError::new(
                    ErrorCode::NotFound,
                    "User or album not found",
                )
                .with_detail("favorite", key.to_string())),
                StoreFailure::Other(e) => Err(db_error("insert favorite")(e)),
            },
        }
    }

    async fn remove(&self, key: FavoriteKey) -> Result<RemoveOutcome, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND album_id = $2")
            .bind(key.user_id.as_i32())
            .bind(key.album_id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete favorite"))?;

        Ok(if result.rows_affected() > 0 {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::AlreadyAbsent
        })
    }

    async fn album_ids_for_user(&self, user_id: UserId) -> Result<Vec<AlbumId>, DomainError> {
        let ids: Vec<(i32,)> = sqlx::query_as("SELECT album_id FROM favorites WHERE user_id = $1")
            .bind(user_id.as_i32())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list favorites"))?;

        Ok(ids.into_iter().map(|(id,)| AlbumId::new(id)).collect())
    }
}
