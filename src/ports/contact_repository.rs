//! Contact repository port.

use async_trait::async_trait;

use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::foundation::{ContactId, DomainError};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, DomainError>;

    /// Most recent first.
    async fn list_all(&self) -> Result<Vec<Contact>, DomainError>;

    /// Returns `false` if no row matched.
    async fn delete(&self, id: ContactId) -> Result<bool, DomainError>;
}
