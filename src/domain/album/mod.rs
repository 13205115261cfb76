//! Album catalog domain module.
//!
//! Albums are created, replaced in place, and deleted by administrators.
//! Deleting an album removes every favorite that references it.

mod aggregate;

pub use aggregate::{Album, AlbumDraft};
