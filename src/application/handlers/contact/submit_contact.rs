//! SubmitContactHandler - Anonymous contact form submission.

use std::sync::Arc;

use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::foundation::ServiceError;
use crate::ports::ContactRepository;

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct SubmitContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl SubmitContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<Contact, ServiceError> {
        let draft = ContactDraft::new(cmd.name, cmd.email, cmd.message)?;
        let contact = self.contacts.create(&draft).await?;

        tracing::info!(contact_id = %contact.id, "Contact message received");
        Ok(contact)
    }
}
