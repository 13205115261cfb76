//! Music Catalog - Album catalog backend
//!
//! Serves a public album catalog, self-service accounts with `user`/`admin`
//! roles, an anonymous contact inbox, and per-user favorites over HTTP/JSON
//! backed by PostgreSQL.
//!
//! Layers, from the inside out:
//!
//! - `domain` - Entities, value objects, and the error taxonomy
//! - `ports` - Traits the application needs from the outside world
//! - `application` - One handler per operation, including the favorites toggle engine
//! - `adapters` - PostgreSQL, in-memory, auth, and HTTP implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
