//! Favorites handlers: the toggle engine and the per-user listing.

mod list_favorites;
mod toggle_favorite;

pub use list_favorites::{ListFavoritesHandler, ListFavoritesQuery};
pub use toggle_favorite::{ToggleFavoriteCommand, ToggleFavoriteHandler, ToggleFavoriteResult};
