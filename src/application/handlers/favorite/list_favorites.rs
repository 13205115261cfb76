//! ListFavoritesHandler - Album ids a user has favorited.
//!
//! Set semantics: the order is whatever the store returns.

use std::sync::Arc;

use crate::domain::foundation::{AlbumId, ServiceError, UserId};
use crate::ports::FavoriteRepository;

#[derive(Debug, Clone, Copy)]
pub struct ListFavoritesQuery {
    pub user_id: UserId,
}

pub struct ListFavoritesHandler {
    favorites: Arc<dyn FavoriteRepository>,
}

impl ListFavoritesHandler {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }

    pub async fn handle(&self, query: ListFavoritesQuery) -> Result<Vec<AlbumId>, ServiceError> {
        Ok(self.favorites.album_ids_for_user(query.user_id).await?)
    }
}
