//! MySQL song repository implementation.

use crate::{pool::DatabasePool, traits::SongRepository};
use async_trait::async_trait;
use cadenza_core::{CatalogError, CatalogResult, PageQuery, Song, SongId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL song repository.
#[derive(Clone)]
pub struct MySqlSongRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlSongRepository {
    /// Creates a new MySQL song repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SongRow {
    id: String,
    name: String,
    album: String,
    composer: String,
    lyricist: String,
    producer: String,
}

impl TryFrom<SongRow> for Song {
    type Error = CatalogError;

    fn try_from(row: SongRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| CatalogError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Song {
            id: SongId::from(id),
            name: row.name,
            album: row.album,
            composer: row.composer,
            lyricist: row.lyricist,
            producer: row.producer,
        })
    }
}

#[async_trait]
impl SongRepository for MySqlSongRepository {
    async fn find_by_id(&self, id: SongId) -> CatalogResult<Option<Song>> {
        debug!("Finding song by id: {}", id);

        let row = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, name, album, composer, lyricist, producer
            FROM songs
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Song::try_from).transpose()
    }

    async fn find_page(&self, album: Option<&str>, page: PageQuery) -> CatalogResult<Vec<Song>> {
        debug!(
            "Finding songs, filter: {:?}, page: {}, limit: {}",
            album, page.page, page.limit
        );

        let rows = match album {
            Some(album) => {
                sqlx::query_as::<_, SongRow>(
                    r#"
                    SELECT id, name, album, composer, lyricist, producer
                    FROM songs
                    WHERE album = ?
                    ORDER BY id
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(album)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query_as::<_, SongRow>(
                    r#"
                    SELECT id, name, album, composer, lyricist, producer
                    FROM songs
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

        rows.into_iter().map(Song::try_from).collect()
    }

    async fn insert(&self, song: &Song) -> CatalogResult<Song> {
        debug!("Inserting song: {}", song.id);

        sqlx::query(
            r#"
            INSERT INTO songs (id, name, album, composer, lyricist, producer)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(song.id.to_string())
        .bind(&song.name)
        .bind(&song.album)
        .bind(&song.composer)
        .bind(&song.lyricist)
        .bind(&song.producer)
        .execute(self.pool.inner())
        .await?;

        Ok(song.clone())
    }

    async fn update(&self, song: &Song) -> CatalogResult<Song> {
        debug!("Updating song: {}", song.id);

        sqlx::query(
            r#"
            UPDATE songs
            SET name = ?, album = ?, composer = ?, lyricist = ?, producer = ?
            WHERE id = ?
            "#,
        )
        .bind(&song.name)
        .bind(&song.album)
        .bind(&song.composer)
        .bind(&song.lyricist)
        .bind(&song.producer)
        .bind(song.id.to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(song.clone())
    }

    async fn delete(&self, id: SongId) -> CatalogResult<bool> {
        debug!("Deleting song: {}", id);

        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
