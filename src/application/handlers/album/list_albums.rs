//! ListAlbumsHandler - Query handler for the public catalog listing.

use std::sync::Arc;

use crate::domain::album::Album;
use crate::domain::foundation::ServiceError;
use crate::ports::AlbumRepository;

pub struct ListAlbumsHandler {
    repository: Arc<dyn AlbumRepository>,
}

impl ListAlbumsHandler {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }

    /// Every album, ascending by id.
    pub async fn handle(&self) -> Result<Vec<Album>, ServiceError> {
        Ok(self.repository.list_all().await?)
    }
}
