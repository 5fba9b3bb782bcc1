//! Song service implementation.

use crate::cache::{cache_keys, CacheAside};
use crate::dto::{CreateSongRequest, SongListResponse, SongResponse, UpdateSongRequest};
use crate::song_service::SongService;
use async_trait::async_trait;
use cadenza_core::{CatalogError, CatalogResult, PageQuery, Song, SongId, ValidateRequest};
use cadenza_repository::SongRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Canonical song service: cache-aside reads, direct writes.
pub struct SongServiceImpl {
    repository: Arc<dyn SongRepository>,
    cache: CacheAside,
}

impl SongServiceImpl {
    /// Creates a new song service.
    pub fn new(repository: Arc<dyn SongRepository>, cache: CacheAside) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl SongService for SongServiceImpl {
    async fn create_song(&self, request: CreateSongRequest) -> CatalogResult<SongResponse> {
        debug!("Creating song: {}", request.name);
        request.validate_request()?;

        let song = Song::new(
            request.name,
            request.album,
            request.composer,
            request.lyricist,
            request.producer,
        );
        let saved = self.repository.insert(&song).await?;

        info!("Song created: {}", saved.id);
        Ok(SongResponse::from(saved))
    }

    async fn get_song(&self, id: SongId) -> CatalogResult<SongResponse> {
        let key = cache_keys::song_details(id);
        let repository = &self.repository;

        let song = self
            .cache
            .get_or_load(&key, || async move {
                Ok(repository.find_by_id(id).await?.map(SongResponse::from))
            })
            .await?;

        song.ok_or_else(|| CatalogError::not_found("Song", id))
    }

    async fn list_songs(
        &self,
        album: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<SongListResponse> {
        if page.is_oversized() {
            warn!(limit = page.limit, "very large song page requested");
        }

        let key = cache_keys::songs_page(album, page);
        let repository = &self.repository;

        let songs = self
            .cache
            .get_or_load(&key, || async move {
                let songs = repository.find_page(album, page).await?;
                Ok(Some(
                    songs.into_iter().map(SongResponse::from).collect::<Vec<_>>(),
                ))
            })
            .await?
            .unwrap_or_default();

        Ok(SongListResponse { songs })
    }

    async fn update_song(
        &self,
        id: SongId,
        request: UpdateSongRequest,
    ) -> CatalogResult<SongResponse> {
        debug!("Updating song: {}", id);
        request.validate_request()?;

        let mut song = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Song", id))?;

        song.name = request.name;
        song.album = request.album;
        song.composer = request.composer;
        song.lyricist = request.lyricist;
        song.producer = request.producer;

        let updated = self.repository.update(&song).await?;

        info!("Song updated: {}", id);
        Ok(SongResponse::from(updated))
    }

    async fn delete_song(&self, id: SongId) -> CatalogResult<()> {
        debug!("Deleting song: {}", id);

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(CatalogError::not_found("Song", id));
        }

        // A deleted record must not be served from cache; list entries are
        // left to age out with their TTL.
        self.cache.invalidate(&cache_keys::song_details(id)).await;

        info!("Song deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for SongServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SongServiceImpl").finish_non_exhaustive()
    }
}
