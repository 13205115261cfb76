//! ListContactsHandler - Admin inbox, newest first.

use std::sync::Arc;

use crate::domain::contact::Contact;
use crate::domain::foundation::ServiceError;
use crate::ports::ContactRepository;

pub struct ListContactsHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl ListContactsHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.contacts.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryContactRepository, InMemoryStore};
    use crate::domain::contact::ContactDraft;

    #[tokio::test]
    async fn newest_message_comes_first() {
        let contacts = Arc::new(InMemoryContactRepository::new(InMemoryStore::new()));
        let mut created = Vec::new();
        for n in 1..=3 {
            let draft =
                ContactDraft::new(format!("C{}", n), "c@example.com", "hello").unwrap();
            created.push(contacts.create(&draft).await.unwrap());
        }

        let listed = ListContactsHandler::new(contacts).handle().await.unwrap();

        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C3", "C2", "C1"]);
    }
}
