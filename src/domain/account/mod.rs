//! Account domain module.
//!
//! Users register themselves (always with role `user`), log in with a
//! username/password pair, and may be promoted or deleted by an admin.
//! The public `User` record never carries credential material.

mod user;

pub use user::{Credentials, NewUser, PasswordHash, StoredUser, User, MAX_PASSWORD_BYTES};
