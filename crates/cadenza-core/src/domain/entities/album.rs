//! Album entity.

use crate::AlbumId;
use serde::{Deserialize, Serialize};

/// An album in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Unique identifier, assigned at creation.
    pub id: AlbumId,

    /// Album title.
    pub album: String,

    /// Artist name.
    pub artist: String,

    /// Release date as an ISO-8601 date string.
    pub release_date: String,

    /// Song names on this album (denormalized, no foreign keys).
    pub songs: Vec<String>,
}

impl Album {
    /// Creates a new album with a fresh identifier.
    #[must_use]
    pub fn new(album: String, artist: String, release_date: String, songs: Vec<String>) -> Self {
        Self {
            id: AlbumId::new(),
            album,
            artist,
            release_date,
            songs,
        }
    }
}
