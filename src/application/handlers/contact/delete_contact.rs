//! DeleteContactHandler - Admin removal of an inbox message.

use std::sync::Arc;

use crate::domain::foundation::{ContactId, ServiceError};
use crate::ports::ContactRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteContactCommand {
    pub contact_id: ContactId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteContactResult {
    pub removed: bool,
}

pub struct DeleteContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl DeleteContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(
        &self,
        cmd: DeleteContactCommand,
    ) -> Result<DeleteContactResult, ServiceError> {
        let removed = self.contacts.delete(cmd.contact_id).await?;

        if removed {
            tracing::info!(contact_id = %cmd.contact_id, "Contact message deleted");
        } else {
            tracing::debug!(contact_id = %cmd.contact_id, "Contact delete matched no row");
        }
        Ok(DeleteContactResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryContactRepository, InMemoryStore};
    use crate::domain::contact::ContactDraft;

    #[tokio::test]
    async fn deletes_once_then_reports_nothing_removed() {
        let contacts = Arc::new(InMemoryContactRepository::new(InMemoryStore::new()));
        let contact = contacts
            .create(&ContactDraft::new("Dana", "d@example.com", "hi").unwrap())
            .await
            .unwrap();
        let handler = DeleteContactHandler::new(contacts.clone());
        let cmd = DeleteContactCommand {
            contact_id: contact.id,
        };

        assert!(handler.handle(cmd).await.unwrap().removed);
        assert!(!handler.handle(cmd).await.unwrap().removed);
        assert!(contacts.list_all().await.unwrap().is_empty());
    }
}
