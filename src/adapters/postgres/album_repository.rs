//! PostgreSQL implementation of AlbumRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::gateway::{column, db_error};
use crate::domain::album::{Album, AlbumDraft};
use crate::domain::foundation::{AlbumId, DomainError, Timestamp};
use crate::ports::AlbumRepository;

#[derive(Clone)]
pub struct PostgresAlbumRepository {
    pool: PgPool,
}

impl PostgresAlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PostgresAlbumRepository {
    async fn list_all(&self) -> Result<Vec<Album>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, artist, url, image_url, created_at
            FROM albums
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list albums"))?;

        rows.iter().map(row_to_album).collect()
    }

    async fn create(&self, draft: &AlbumDraft) -> Result<Album, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO albums (title, artist, url, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, artist, url, image_url, created_at
            "#,
        )
        .bind(draft.title())
        .bind(draft.artist())
        .bind(draft.url())
        .bind(draft.image_url())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("insert album"))?;

        row_to_album(&row)
    }

    async fn update(&self, id: AlbumId, draft: &AlbumDraft) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE albums SET
                title = $2,
                artist = $3,
                url = $4,
                image_url = $5
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .bind(draft.title())
        .bind(draft.artist())
        .bind(draft.url())
        .bind(draft.image_url())
        .execute(&self.pool)
        .await
        .map_err(db_error("update album"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: AlbumId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete album"))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_album(row: &PgRow) -> Result<Album, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    Ok(Album {
        id: AlbumId::new(column(row, "id")?),
        title: column(row, "title")?,
        artist: column(row, "artist")?,
        url: column(row, "url")?,
        image_url: column(row, "image_url")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
