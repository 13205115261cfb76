//! HTTP DTOs for favorites endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::favorite::ToggleAction;

/// Body of `POST /favorites`. Accepts camelCase and snake_case keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleFavoriteRequest {
    #[serde(default, rename = "userId", alias = "user_id")]
    pub user_id: Option<i32>,
    #[serde(default, rename = "albumId", alias = "album_id")]
    pub album_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub message: String,
    pub action: ToggleAction,
}

impl From<ToggleAction> for ToggleFavoriteResponse {
    fn from(action: ToggleAction) -> Self {
        Self {
            message: action.message().to_string(),
            action,
        }
    }
}
