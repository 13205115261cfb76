//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement these.
//!
//! ## Repository Ports
//!
//! - `AlbumRepository` - Album catalog CRUD
//! - `UserRepository` - Accounts, credential lookup, roles
//! - `ContactRepository` - Contact inbox
//! - `FavoriteRepository` - Favorite rows used by the toggle engine
//!
//! ## Auth Ports
//!
//! - `PasswordHasher` - Salted one-way password hashing
//! - `TokenIssuer` - Signs bearer tokens at login
//! - `SessionValidator` - Resolves the caller from a bearer token

mod album_repository;
mod contact_repository;
mod favorite_repository;
mod password_hasher;
mod session_validator;
mod token_issuer;
mod user_repository;

pub use album_repository::AlbumRepository;
pub use contact_repository::ContactRepository;
pub use favorite_repository::FavoriteRepository;
pub use password_hasher::PasswordHasher;
pub use session_validator::SessionValidator;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use user_repository::UserRepository;
