//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Longest bearer token lifetime accepted: one year.
const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 3600;

/// Authentication configuration (password hashing and bearer tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: SecretString,

    /// Bearer token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Administrator account guaranteed to exist at startup
    pub bootstrap_admin_username: Option<String>,

    /// Password for the bootstrap administrator
    pub bootstrap_admin_password: Option<SecretString>,
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Returns the bootstrap administrator credentials when both halves are set.
    pub fn bootstrap_admin(&self) -> Option<(&str, &SecretString)> {
        match (&self.bootstrap_admin_username, &self.bootstrap_admin_password) {
            (Some(username), Some(password)) => Some((username.as_str(), password)),
            _ => None,
        }
    }

    /// Validate authentication configuration
    ///
    /// Production requires a signing secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < 32 {
            return Err(ValidationError::WeakJwtSecret);
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ValidationError::InvalidBcryptCost);
        }
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.bootstrap_admin_username.is_some() != self.bootstrap_admin_password.is_some() {
            return Err(ValidationError::IncompleteBootstrapAdmin);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_ttl_secs: default_token_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
            bootstrap_admin_username: None,
            bootstrap_admin_password: None,
        }
    }
}

fn default_token_ttl() -> u64 {
    24 * 3600
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}
