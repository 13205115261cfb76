//! Persistence gateway - connection pool, migrations, and error classification.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow, PgSslMode};
use sqlx::{PgPool, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a pool sized and timed from configuration.
///
/// Connections are checked out per query and returned on every exit path.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut options: PgConnectOptions = config.url.parse()?;
    if config.require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect_with(options)
        .await
}

/// Applies the embedded `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// How a failed statement should be interpreted by a repository.
#[derive(Debug)]
pub(crate) enum StoreFailure {
    UniqueViolation,
    ForeignKeyViolation,
    Other(sqlx::Error),
}

impl StoreFailure {
    pub(crate) fn classify(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreFailure::UniqueViolation
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                StoreFailure::ForeignKeyViolation
            }
            _ => StoreFailure::Other(err),
        }
    }
}

/// Wraps an opaque driver error with what was being attempted.
pub(crate) fn db_error(action: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(format!("Failed to {}: {}", action, e))
}

/// Reads one column, reporting a decode failure as a store error.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}
