//! Song-related DTOs.

use cadenza_core::{Song, SongId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new song.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSongRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Album name this song belongs to (denormalized).
    #[validate(length(min = 1, message = "album is required"))]
    pub album: String,

    #[validate(length(min = 1, message = "composer is required"))]
    pub composer: String,

    #[validate(length(min = 1, message = "lyricist is required"))]
    pub lyricist: String,

    #[validate(length(min = 1, message = "producer is required"))]
    pub producer: String,
}

/// Request to fully replace a song.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSongRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "album is required"))]
    pub album: String,

    #[validate(length(min = 1, message = "composer is required"))]
    pub composer: String,

    #[validate(length(min = 1, message = "lyricist is required"))]
    pub lyricist: String,

    #[validate(length(min = 1, message = "producer is required"))]
    pub producer: String,
}

/// Song response DTO; also the cached representation of a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SongResponse {
    pub id: SongId,
    pub name: String,
    pub album: String,
    pub composer: String,
    pub lyricist: String,
    pub producer: String,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            name: song.name,
            album: song.album,
            composer: song.composer,
            lyricist: song.lyricist,
            producer: song.producer,
        }
    }
}

/// A page of songs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SongListResponse {
    pub songs: Vec<SongResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_all_credits() {
        let request = CreateSongRequest {
            name: "Track".to_string(),
            album: "Album".to_string(),
            composer: "C".to_string(),
            lyricist: String::new(),
            producer: "P".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
