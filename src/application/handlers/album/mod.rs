//! Album command and query handlers.

mod create_album;
mod delete_album;
mod list_albums;
mod update_album;

pub use create_album::{CreateAlbumCommand, CreateAlbumHandler};
pub use delete_album::{DeleteAlbumCommand, DeleteAlbumHandler, DeleteAlbumResult};
pub use list_albums::ListAlbumsHandler;
pub use update_album::{UpdateAlbumCommand, UpdateAlbumHandler, UpdateAlbumResult};
