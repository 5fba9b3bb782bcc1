//! MySQL album repository implementation.

use crate::{pool::DatabasePool, traits::AlbumRepository};
use async_trait::async_trait;
use cadenza_core::{Album, AlbumId, CatalogError, CatalogResult, PageQuery};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL album repository.
#[derive(Clone)]
pub struct MySqlAlbumRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlAlbumRepository {
    /// Creates a new MySQL album repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an album.
#[derive(Debug, FromRow)]
struct AlbumRow {
    id: String, // UUID stored as CHAR(36)
    album: String,
    artist: String,
    release_date: String,
    songs: Json<Vec<String>>,
}

impl TryFrom<AlbumRow> for Album {
    type Error = CatalogError;

    fn try_from(row: AlbumRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| CatalogError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Album {
            id: AlbumId::from(id),
            album: row.album,
            artist: row.artist,
            release_date: row.release_date,
            songs: row.songs.0,
        })
    }
}

#[async_trait]
impl AlbumRepository for MySqlAlbumRepository {
    async fn find_by_id(&self, id: AlbumId) -> CatalogResult<Option<Album>> {
        debug!("Finding album by id: {}", id);

        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, album, artist, release_date, songs
            FROM albums
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Album::try_from).transpose()
    }

    async fn find_page(
        &self,
        release_date: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<Vec<Album>> {
        debug!(
            "Finding albums, filter: {:?}, page: {}, limit: {}",
            release_date, page.page, page.limit
        );

        let rows = match release_date {
            Some(date) => {
                sqlx::query_as::<_, AlbumRow>(
                    r#"
                    SELECT id, album, artist, release_date, songs
                    FROM albums
                    WHERE release_date = ?
                    ORDER BY id
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(date)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query_as::<_, AlbumRow>(
                    r#"
                    SELECT id, album, artist, release_date, songs
                    FROM albums
                    ORDER BY id
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
        };

        rows.into_iter().map(Album::try_from).collect()
    }

    async fn insert(&self, album: &Album) -> CatalogResult<Album> {
        debug!("Inserting album: {}", album.id);

        sqlx::query(
            r#"
            INSERT INTO albums (id, album, artist, release_date, songs)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(album.id.to_string())
        .bind(&album.album)
        .bind(&album.artist)
        .bind(&album.release_date)
        .bind(Json(&album.songs))
        .execute(self.pool.inner())
        .await?;

        Ok(album.clone())
    }

    async fn update(&self, album: &Album) -> CatalogResult<Album> {
        debug!("Updating album: {}", album.id);

        sqlx::query(
            r#"
            UPDATE albums
            SET album = ?, artist = ?, release_date = ?, songs = ?
            WHERE id = ?
            "#,
        )
        .bind(&album.album)
        .bind(&album.artist)
        .bind(&album.release_date)
        .bind(Json(&album.songs))
        .bind(album.id.to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(album.clone())
    }

    async fn delete(&self, id: AlbumId) -> CatalogResult<bool> {
        debug!("Deleting album: {}", id);

        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
