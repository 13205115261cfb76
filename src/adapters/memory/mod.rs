//! In-memory adapters - Repository ports over a shared, mutex-guarded table set.
//!
//! Enforces the same invariants as the PostgreSQL schema (unique usernames,
//! unique favorite pairs, foreign keys, cascading deletes) so the HTTP
//! surface and handlers can be exercised without a database.

mod album_repository;
mod contact_repository;
mod favorite_repository;
mod store;
mod user_repository;

pub use album_repository::InMemoryAlbumRepository;
pub use contact_repository::InMemoryContactRepository;
pub use favorite_repository::InMemoryFavoriteRepository;
pub use store::InMemoryStore;
pub use user_repository::InMemoryUserRepository;
