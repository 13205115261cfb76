//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `gateway` - Pool construction, migrations, driver error classification
//! - `PostgresAlbumRepository` - Album catalog
//! - `PostgresUserRepository` - Accounts and roles
//! - `PostgresContactRepository` - Contact inbox
//! - `PostgresFavoriteRepository` - Favorite rows behind the toggle engine

mod album_repository;
mod contact_repository;
mod favorite_repository;
mod gateway;
mod user_repository;

pub use album_repository::PostgresAlbumRepository;
pub use contact_repository::PostgresContactRepository;
pub use favorite_repository::PostgresFavoriteRepository;
pub use gateway::{connect, run_migrations};
pub use user_repository::PostgresUserRepository;
