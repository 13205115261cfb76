//! Contact message entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, Timestamp, ValidationError};

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// A validated, not yet stored contact message. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ValidationError::non_empty("name", name)?,
            email: ValidationError::non_empty("email", email)?,
            message: ValidationError::non_empty("message", message)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_contact(self, id: ContactId, created_at: Timestamp) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}
