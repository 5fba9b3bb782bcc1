//! Album service trait definition.

use crate::dto::{
    AlbumListResponse, AlbumResponse, CreateAlbumRequest, PatchAlbumRequest, UpdateAlbumRequest,
};
use async_trait::async_trait;
use cadenza_core::{AlbumId, CatalogResult, PageQuery};

/// Album operations. Reads go through the cache-aside accessor; writes go
/// straight to the store.
#[async_trait]
pub trait AlbumService: Send + Sync {
    /// Creates a new album.
    async fn create_album(&self, request: CreateAlbumRequest) -> CatalogResult<AlbumResponse>;

    /// Gets an album by ID (cached for one hour).
    async fn get_album(&self, id: AlbumId) -> CatalogResult<AlbumResponse>;

    /// Lists albums, optionally filtered by release date (cached for one hour).
    async fn list_albums(
        &self,
        release_date: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<AlbumListResponse>;

    /// Fully replaces an album.
    async fn update_album(
        &self,
        id: AlbumId,
        request: UpdateAlbumRequest,
    ) -> CatalogResult<AlbumResponse>;

    /// Applies an allow-listed partial update.
    async fn patch_album(
        &self,
        id: AlbumId,
        request: PatchAlbumRequest,
    ) -> CatalogResult<AlbumResponse>;

    /// Deletes an album.
    async fn delete_album(&self, id: AlbumId) -> CatalogResult<()>;
}
