//! UpdateAlbumHandler - Command handler for replacing an album's fields.
//!
//! An id that matches no row is reported as success with `matched = false`.
//! This keeps the externally observed behavior of the catalog API rather
//! than answering 404.

use std::sync::Arc;

use crate::domain::album::AlbumDraft;
use crate::domain::foundation::{AlbumId, ServiceError};
use crate::ports::AlbumRepository;

#[derive(Debug, Clone)]
pub struct UpdateAlbumCommand {
    pub album_id: AlbumId,
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAlbumResult {
    pub matched: bool,
}

pub struct UpdateAlbumHandler {
    repository: Arc<dyn AlbumRepository>,
}

impl UpdateAlbumHandler {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateAlbumCommand) -> Result<UpdateAlbumResult, ServiceError> {
        let draft = AlbumDraft::new(cmd.title, cmd.artist, cmd.url, cmd.image_url)?;
        let matched = self.repository.update(cmd.album_id, &draft).await?;

        if matched {
            tracing::info!(album_id = %cmd.album_id, "Album updated");
        } else {
            tracing::debug!(album_id = %cmd.album_id, "Album update matched no row");
        }
        Ok(UpdateAlbumResult { matched })
    }
}
