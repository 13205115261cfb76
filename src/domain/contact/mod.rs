//! Contact inbox domain module.
//!
//! Messages are immutable once submitted and can only be deleted by an admin.

mod message;

pub use message::{Contact, ContactDraft};
