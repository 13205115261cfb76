//! PostgreSQL implementation of ContactRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::gateway::{column, db_error};
use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::foundation::{ContactId, DomainError, Timestamp};
use crate::ports::ContactRepository;

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(draft.name())
        .bind(draft.email())
        .bind(draft.message())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("insert contact"))?;

        row_to_contact(&row)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, DomainError> {
        // id breaks ties between rows inserted within the same clock tick
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list contacts"))?;

        rows.iter().map(row_to_contact).collect()
    }

    async fn delete(&self, id: ContactId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete contact"))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_contact(row: &PgRow) -> Result<Contact, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    Ok(Contact {
        id: ContactId::new(column(row, "id")?),
        name: column(row, "name")?,
        email: column(row, "email")?,
        message: column(row, "message")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
