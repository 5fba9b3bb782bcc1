//! Repository trait definitions.
//!
//! The persistent store is an external collaborator reached only through
//! these seams: plain find/insert/update/delete per collection, with an
//! equality filter and offset pagination on the list operations.

use async_trait::async_trait;
use cadenza_core::{Album, AlbumId, CatalogResult, PageQuery, Song, SongId, User, UserId};

/// User collection access.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> CatalogResult<Option<User>>;

    /// Finds a user by email (used by login).
    async fn find_by_email(&self, email: &str) -> CatalogResult<Option<User>>;

    /// Finds a page of users, optionally filtered by charge.
    async fn find_page(&self, charge: Option<&str>, page: PageQuery) -> CatalogResult<Vec<User>>;

    /// Inserts a new user.
    async fn insert(&self, user: &User) -> CatalogResult<User>;

    /// Updates an existing user. Last write wins.
    async fn update(&self, user: &User) -> CatalogResult<User>;

    /// Deletes a user by ID. Returns `true` if a record was removed.
    async fn delete(&self, id: UserId) -> CatalogResult<bool>;
}

/// Album collection access.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Finds an album by ID.
    async fn find_by_id(&self, id: AlbumId) -> CatalogResult<Option<Album>>;

    /// Finds a page of albums, optionally filtered by release date.
    async fn find_page(
        &self,
        release_date: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<Vec<Album>>;

    /// Inserts a new album.
    async fn insert(&self, album: &Album) -> CatalogResult<Album>;

    /// Updates an existing album. Last write wins.
    async fn update(&self, album: &Album) -> CatalogResult<Album>;

    /// Deletes an album by ID. Returns `true` if a record was removed.
    async fn delete(&self, id: AlbumId) -> CatalogResult<bool>;
}

/// Song collection access.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Finds a song by ID.
    async fn find_by_id(&self, id: SongId) -> CatalogResult<Option<Song>>;

    /// Finds a page of songs, optionally filtered by album name.
    async fn find_page(&self, album: Option<&str>, page: PageQuery) -> CatalogResult<Vec<Song>>;

    /// Inserts a new song.
    async fn insert(&self, song: &Song) -> CatalogResult<Song>;

    /// Updates an existing song. Last write wins.
    async fn update(&self, song: &Song) -> CatalogResult<Song>;

    /// Deletes a song by ID. Returns `true` if a record was removed.
    async fn delete(&self, id: SongId) -> CatalogResult<bool>;
}
