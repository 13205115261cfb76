//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, roles, errors)
//! - `album` - Album catalog entity
//! - `account` - User accounts and credentials
//! - `contact` - Contact inbox messages
//! - `favorite` - Per-user favorites and the toggle protocol

pub mod account;
pub mod album;
pub mod contact;
pub mod favorite;
pub mod foundation;
