//! Toggle protocol types.
//!
//! A toggle is read-then-act: observe whether the pair is favorited, then
//! apply the opposite transition. Because the two steps are separate, a
//! concurrent toggle can change the row in between. The store's uniqueness
//! constraint keeps the table free of duplicates, and the "lost" branches
//! surface as `InsertOutcome::AlreadyPresent` / `RemoveOutcome::AlreadyAbsent`,
//! which the engine accepts as success.
//!
//! Consequence: the reported `ToggleAction` is the transition that was
//! *decided*, which under a race can disagree with the final persisted state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AlbumId, UserId};

/// The (user, album) pair that identifies a favorite row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteKey {
    pub user_id: UserId,
    pub album_id: AlbumId,
}

impl FavoriteKey {
    pub fn new(user_id: UserId, album_id: AlbumId) -> Self {
        Self { user_id, album_id }
    }
}

impl fmt::Display for FavoriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user {} / album {}", self.user_id, self.album_id)
    }
}

/// Transition decided by a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

impl ToggleAction {
    /// Picks the transition opposite to the observed state.
    pub fn decide(currently_favorited: bool) -> Self {
        if currently_favorited {
            ToggleAction::Removed
        } else {
            ToggleAction::Added
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ToggleAction::Added => "Added to favorites",
            ToggleAction::Removed => "Removed from favorites",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleAction::Added => write!(f, "added"),
            ToggleAction::Removed => write!(f, "removed"),
        }
    }
}

/// Result of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The uniqueness constraint rejected a duplicate row.
    AlreadyPresent,
}

/// Result of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Zero rows affected.
    AlreadyAbsent,
}
