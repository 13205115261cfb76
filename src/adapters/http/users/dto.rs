//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::account::User;
use crate::domain::foundation::Timestamp;

/// Body of `POST /register` and `POST /login`.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Body of `PUT /users/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleRequest {
    #[serde(default)]
    pub role: Option<String>,
}

/// Successful login: the public user fields plus the bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
    pub expires_at: Timestamp,
}
