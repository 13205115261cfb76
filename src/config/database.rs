//! PostgreSQL pool settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_POOL_SIZE: u32 = 100;

/// Connection settings for the catalog database.
///
/// Only `url` is required; it may come from the bare `DATABASE_URL` that
/// hosting platforms inject.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,

    pub min_connections: u32,
    pub max_connections: u32,

    /// Seconds to wait for a free connection before failing the query
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,

    /// Encrypt the connection without verifying the server certificate.
    /// Hosted Postgres providers commonly need this.
    pub require_ssl: bool,

    /// Apply `migrations/` on startup
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let scheme = self.url.split_once("://").map(|(scheme, _)| scheme);
        match scheme {
            _ if self.url.trim().is_empty() => {
                return Err(ValidationError::MissingRequired("DATABASE_URL"))
            }
            Some("postgres") | Some("postgresql") => {}
            _ => return Err(ValidationError::InvalidDatabaseUrl),
        }

        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            require_ssl: false,
            run_migrations: false,
        }
    }
}
