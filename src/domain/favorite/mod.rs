//! Favorites domain module.
//!
//! A favorite is a join fact between a user and an album with at most one
//! row per pair. Rows are created and destroyed only by the toggle protocol.

mod toggle;

pub use toggle::{FavoriteKey, InsertOutcome, RemoveOutcome, ToggleAction};
