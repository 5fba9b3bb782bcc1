//! Song entity.

use crate::SongId;
use serde::{Deserialize, Serialize};

/// A song in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier, assigned at creation.
    pub id: SongId,

    /// Song title.
    pub name: String,

    /// Album name this song belongs to (denormalized).
    pub album: String,

    /// Composer credit.
    pub composer: String,

    /// Lyricist credit.
    pub lyricist: String,

    /// Producer credit.
    pub producer: String,
}

impl Song {
    /// Creates a new song with a fresh identifier.
    #[must_use]
    pub fn new(
        name: String,
        album: String,
        composer: String,
        lyricist: String,
        producer: String,
    ) -> Self {
        Self {
            id: SongId::new(),
            name,
            album,
            composer,
            lyricist,
            producer,
        }
    }
}
