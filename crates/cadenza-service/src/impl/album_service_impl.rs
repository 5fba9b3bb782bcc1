//! Album service implementation.

use crate::album_service::AlbumService;
use crate::cache::{cache_keys, CacheAside};
use crate::dto::{
    AlbumListResponse, AlbumResponse, CreateAlbumRequest, PatchAlbumRequest, UpdateAlbumRequest,
};
use async_trait::async_trait;
use cadenza_core::{Album, AlbumId, CatalogError, CatalogResult, PageQuery, ValidateRequest};
use cadenza_repository::AlbumRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Canonical album service: cache-aside reads, direct writes.
///
/// Writes do not invalidate cache entries; a cached read may stay stale
/// until its TTL elapses (see DESIGN.md).
pub struct AlbumServiceImpl {
    repository: Arc<dyn AlbumRepository>,
    cache: CacheAside,
}

impl AlbumServiceImpl {
    /// Creates a new album service.
    pub fn new(repository: Arc<dyn AlbumRepository>, cache: CacheAside) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl AlbumService for AlbumServiceImpl {
    async fn create_album(&self, request: CreateAlbumRequest) -> CatalogResult<AlbumResponse> {
        debug!("Creating album: {}", request.album);
        request.validate_request()?;

        let album = Album::new(
            request.album,
            request.artist,
            request.release_date,
            request.songs,
        );
        let saved = self.repository.insert(&album).await?;

        info!("Album created: {}", saved.id);
        Ok(AlbumResponse::from(saved))
    }

    async fn get_album(&self, id: AlbumId) -> CatalogResult<AlbumResponse> {
        let key = cache_keys::album_details(id);
        let repository = &self.repository;

        let album = self
            .cache
            .get_or_load(&key, || async move {
                Ok(repository.find_by_id(id).await?.map(AlbumResponse::from))
            })
            .await?;

        album.ok_or_else(|| CatalogError::not_found("Album", id))
    }

    async fn list_albums(
        &self,
        release_date: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<AlbumListResponse> {
        if page.is_oversized() {
            warn!(limit = page.limit, "very large album page requested");
        }

        let key = cache_keys::albums_page(release_date, page);
        let repository = &self.repository;

        let albums = self
            .cache
            .get_or_load(&key, || async move {
                let albums = repository.find_page(release_date, page).await?;
                Ok(Some(
                    albums.into_iter().map(AlbumResponse::from).collect::<Vec<_>>(),
                ))
            })
            .await?
            .unwrap_or_default();

        Ok(AlbumListResponse { albums })
    }

    async fn update_album(
        &self,
        id: AlbumId,
        request: UpdateAlbumRequest,
    ) -> CatalogResult<AlbumResponse> {
        debug!("Updating album: {}", id);
        request.validate_request()?;

        let mut album = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Album", id))?;

        album.album = request.album;
        album.artist = request.artist;
        album.release_date = request.release_date;
        album.songs = request.songs;

        let updated = self.repository.update(&album).await?;

        info!("Album updated: {}", id);
        Ok(AlbumResponse::from(updated))
    }

    async fn patch_album(
        &self,
        id: AlbumId,
        request: PatchAlbumRequest,
    ) -> CatalogResult<AlbumResponse> {
        debug!("Patching album: {}", id);

        let mut album = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Album", id))?;

        if let Some(title) = request.album {
            album.album = title;
        }
        if let Some(artist) = request.artist {
            album.artist = artist;
        }
        if let Some(release_date) = request.release_date {
            album.release_date = release_date;
        }
        if let Some(songs) = request.songs {
            album.songs = songs;
        }

        let updated = self.repository.update(&album).await?;

        info!("Album patched: {}", id);
        Ok(AlbumResponse::from(updated))
    }

    async fn delete_album(&self, id: AlbumId) -> CatalogResult<()> {
        debug!("Deleting album: {}", id);

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(CatalogError::not_found("Album", id));
        }

        // A deleted record must not be served from cache; list entries are
        // left to age out with their TTL.
        self.cache.invalidate(&cache_keys::album_details(id)).await;

        info!("Album deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for AlbumServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlbumServiceImpl").finish_non_exhaustive()
    }
}
