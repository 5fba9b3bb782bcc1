//! Song service trait definition.

use crate::dto::{CreateSongRequest, SongListResponse, SongResponse, UpdateSongRequest};
use async_trait::async_trait;
use cadenza_core::{CatalogResult, PageQuery, SongId};

/// Song operations. Reads go through the cache-aside accessor; writes go
/// straight to the store.
#[async_trait]
pub trait SongService: Send + Sync {
    /// Creates a new song.
    async fn create_song(&self, request: CreateSongRequest) -> CatalogResult<SongResponse>;

    /// Gets a song by ID (cached for one hour).
    async fn get_song(&self, id: SongId) -> CatalogResult<SongResponse>;

    /// Lists songs, optionally filtered by album name (cached for one hour).
    async fn list_songs(
        &self,
        album: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<SongListResponse>;

    /// Fully replaces a song.
    async fn update_song(&self, id: SongId, request: UpdateSongRequest)
        -> CatalogResult<SongResponse>;

    /// Deletes a song.
    async fn delete_song(&self, id: SongId) -> CatalogResult<()>;
}
