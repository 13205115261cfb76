//! Contact inbox command and query handlers.

mod delete_contact;
mod list_contacts;
mod submit_contact;

pub use delete_contact::{DeleteContactCommand, DeleteContactHandler, DeleteContactResult};
pub use list_contacts::ListContactsHandler;
pub use submit_contact::{SubmitContactCommand, SubmitContactHandler};
