//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Repository ports over a PostgreSQL pool
//! - `memory` - Repository ports over an in-process table set
//! - `auth` - bcrypt password hashing and JWT sessions
//! - `http` - axum REST surface

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
