//! PostgreSQL implementation of UserRepository.
//!
//! The `password` column is only ever read by `find_by_username`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::gateway::{column, db_error, StoreFailure};
use crate::domain::account::{NewUser, PasswordHash, StoredUser, User};
use crate::domain::foundation::{DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, role, created_at
            "#,
        )
        .bind(&user.username)
        .bind(user.password_hash.as_str())
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row_to_user(&row),
            Err(e) => match StoreFailure::classify(e) {
                StoreFailure::UniqueViolation => Err(DomainError::new(
                    ErrorCode::Conflict,
                    "Username already taken",
                )
                .with_detail("username", user.username.clone())),
                StoreFailure::ForeignKeyViolation => {
                    Err(DomainError::database("Unexpected foreign key violation on users"))
                }
                StoreFailure::Other(e) => Err(db_error("insert user")(e)),
            },
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch user by username"))?;

        match row {
            Some(row) => {
                let password: String = column(&row, "password")?;
                Ok(Some(StoredUser {
                    user: row_to_user(&row)?,
                    password_hash: PasswordHash::new(password),
                }))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, username, role, created_at FROM users WHERE id = $1")
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch user"))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query("SELECT id, username, role, created_at FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list users"))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn set_role(&self, id: UserId, role: Role) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id.as_i32())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("update user role"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete user"))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let role: String = column(row, "role")?;
    let role = role
        .parse::<Role>()
        .map_err(|e| DomainError::database(format!("Invalid role in users table: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(User {
        id: UserId::new(column(row, "id")?),
        username: column(row, "username")?,
        role,
        created_at: Timestamp::from_datetime(created_at),
    })
}
