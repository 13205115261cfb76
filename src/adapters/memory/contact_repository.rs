//! In-memory implementation of ContactRepository.

use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::foundation::{ContactId, DomainError, Timestamp};
use crate::ports::ContactRepository;

#[derive(Clone)]
pub struct InMemoryContactRepository {
    store: InMemoryStore,
}

impl InMemoryContactRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, DomainError> {
        let mut tables = self.store.lock()?;
        let id = tables.next_contact_id();
        let contact = draft.clone().into_contact(id, Timestamp::now());
        tables.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, DomainError> {
        let mut contacts: Vec<Contact> = self.store.lock()?.contacts.values().cloned().collect();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn delete(&self, id: ContactId) -> Result<bool, DomainError> {
        Ok(self.store.lock()?.contacts.remove(&id).is_some())
    }
}
