//! Request DTOs for album endpoints. Responses serialize `Album` directly.

use serde::Deserialize;

/// Body of `POST /albums` and `PUT /albums/:id`.
///
/// Fields are optional at the serde level so a missing one becomes a 400
/// with the standard error body rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
