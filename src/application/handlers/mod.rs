//! Command and query handlers, one per operation.
//!
//! Handlers depend only on ports. Authorization is decided at the HTTP
//! surface before a handler is constructed.

pub mod account;
pub mod album;
pub mod contact;
pub mod favorite;
