//! Shared table set behind the in-memory repositories.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::account::StoredUser;
use crate::domain::album::Album;
use crate::domain::contact::Contact;
use crate::domain::favorite::FavoriteKey;
use crate::domain::foundation::{AlbumId, ContactId, DomainError, UserId};

/// Handle to one logical database. Clones share the same tables.
///
/// Every repository call takes the lock exactly once, so each call is
/// atomic with respect to the others, mirroring a single SQL statement.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Default)]
pub(super) struct Tables {
    pub albums: BTreeMap<AlbumId, Album>,
    pub users: BTreeMap<UserId, StoredUser>,
    pub contacts: BTreeMap<ContactId, Contact>,
    pub favorites: BTreeSet<FavoriteKey>,
    last_album_id: i32,
    last_user_id: i32,
    last_contact_id: i32,
}

impl Tables {
    pub fn next_album_id(&mut self) -> AlbumId {
        self.last_album_id += 1;
        AlbumId::new(self.last_album_id)
    }

    pub fn next_user_id(&mut self) -> UserId {
        self.last_user_id += 1;
        UserId::new(self.last_user_id)
    }

    pub fn next_contact_id(&mut self) -> ContactId {
        self.last_contact_id += 1;
        ContactId::new(self.last_contact_id)
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn lock(&self) -> Result<MutexGuard<'_, Tables>, DomainError> {
        self.tables
            .lock()
            .map_err(|_| DomainError::database("In-memory store lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_per_table() {
        let store = InMemoryStore::new();
        let mut tables = store.lock().unwrap();
        assert_eq!(tables.next_album_id(), AlbumId::new(1));
        assert_eq!(tables.next_album_id(), AlbumId::new(2));
        assert_eq!(tables.next_user_id(), UserId::new(1));
        assert_eq!(tables.next_contact_id(), ContactId::new(1));
    }

    #[test]
    fn clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.lock().unwrap().next_user_id();
        assert_eq!(other.lock().unwrap().next_user_id(), UserId::new(2));
    }
}
