//! Album-related DTOs.

use cadenza_core::{Album, AlbumId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new album.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    #[validate(length(min = 1, message = "album is required"))]
    pub album: String,

    #[validate(length(min = 1, message = "artist is required"))]
    pub artist: String,

    #[validate(length(min = 1, message = "releaseDate is required"))]
    pub release_date: String,

    /// Song names on the album (denormalized).
    #[serde(default)]
    pub songs: Vec<String>,
}

/// Request to fully replace an album.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumRequest {
    #[validate(length(min = 1, message = "album is required"))]
    pub album: String,

    #[validate(length(min = 1, message = "artist is required"))]
    pub artist: String,

    #[validate(length(min = 1, message = "releaseDate is required"))]
    pub release_date: String,

    #[serde(default)]
    pub songs: Vec<String>,
}

/// Partial album update restricted to the mutable field allow-list.
///
/// Unknown members are rejected outright rather than merged into the
/// record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchAlbumRequest {
    pub album: Option<String>,
    pub artist: Option<String>,
    pub release_date: Option<String>,
    pub songs: Option<Vec<String>>,
}

/// Album response DTO; also the cached representation of an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub id: AlbumId,
    pub album: String,
    pub artist: String,
    pub release_date: String,
    pub songs: Vec<String>,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            album: album.album,
            artist: album.artist,
            release_date: album.release_date,
            songs: album.songs,
        }
    }
}

/// A page of albums.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumListResponse {
    pub albums: Vec<AlbumResponse>,
}
