//! HTTP listener settings

use serde::{Deserialize, Deserializer};
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request the timeout layer will allow.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where the catalog listens and how it treats requests.
///
/// Every field has a default, so an empty `server` section is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    /// Defaults to 5000; hosting platforms usually override it via `PORT`.
    pub port: u16,

    pub environment: Environment,

    /// `EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_level: String,

    pub request_timeout_secs: u64,

    /// Browser origins allowed by CORS. Accepts a list or a
    /// comma-separated string, as environment variables can only carry the latter.
    #[serde(deserialize_with = "origin_list")]
    pub cors_origins: Vec<String>,
}

/// Deployment flavor. Production switches logs to JSON, tightens CORS,
/// and demands a strong signing secret.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// # Errors
    ///
    /// - `InvalidHost` if `host` is not an IP literal
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// True when no origin list is configured outside production.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() && !self.is_production()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: Environment::Development,
            log_level: "info,music_catalog=debug,sqlx=warn,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: Vec::new(),
        }
    }
}

fn origin_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Origins {
        Joined(String),
        Listed(Vec<String>),
    }

    let raw = match Origins::deserialize(deserializer)? {
        Origins::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        Origins::Listed(listed) => listed,
    };
    Ok(raw
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect())
}
