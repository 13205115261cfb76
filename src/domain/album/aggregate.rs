//! Album entity and its validated write model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlbumId, Timestamp, ValidationError};

/// An album as stored in the catalog.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// The four mutable fields of an album, validated.
///
/// Used both for creation and for full replacement on update.
///
/// # Invariants
///
/// - `title` and `artist` are non-blank
/// - blank `url` / `image_url` are normalized to `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDraft {
    title: String,
    artist: String,
    url: Option<String>,
    image_url: Option<String>,
}

impl AlbumDraft {
    /// # Errors
    ///
    /// - `EmptyField` if `title` or `artist` is blank
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: ValidationError::non_empty("title", title)?,
            artist: ValidationError::non_empty("artist", artist)?,
            url: url.filter(|u| !u.trim().is_empty()),
            image_url: image_url.filter(|u| !u.trim().is_empty()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Materializes the draft with store-assigned fields.
    pub fn into_album(self, id: AlbumId, created_at: Timestamp) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            url: self.url,
            image_url: self.image_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_accepts_title_and_artist() {
        let draft = AlbumDraft::new(
            "Habibi Funk 030: Hawalat",
            "Charif Megarbane",
            Some("https://habibifunkrecords.bandcamp.com/album/habibi-funk-030-hawalat".into()),
            None,
        )
        .unwrap();

        assert_eq!(draft.title(), "Habibi Funk 030: Hawalat");
        assert_eq!(draft.artist(), "Charif Megarbane");
        assert!(draft.url().is_some());
        assert!(draft.image_url().is_none());
    }

    #[test]
    fn draft_rejects_empty_title() {
        let err = AlbumDraft::new("", "Maha", None, None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("title"));
    }

    #[test]
    fn draft_rejects_blank_artist() {
        let err = AlbumDraft::new("Orkos", "   ", None, None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("artist"));
    }

    #[test]
    fn blank_links_become_none() {
        let draft = AlbumDraft::new("Orkos", "Maha", Some(" ".into()), Some(String::new())).unwrap();
        assert!(draft.url().is_none());
        assert!(draft.image_url().is_none());
    }

    #[test]
    fn into_album_carries_store_fields() {
        let created_at = Timestamp::now();
        let album = AlbumDraft::new("Marzipan", "Charif Megarbane", None, None)
            .unwrap()
            .into_album(AlbumId::new(10), created_at);

        assert_eq!(album.id, AlbumId::new(10));
        assert_eq!(album.created_at, created_at);
        assert_eq!(album.title, "Marzipan");
    }
}
