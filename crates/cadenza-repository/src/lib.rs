//! # Cadenza Repository
//!
//! Data access for the music catalog. Services talk to the store through
//! the trait seams in [`traits`] (`Arc<dyn AlbumRepository>` and friends);
//! the MySQL implementations in [`mysql`] are wired in at process start
//! with a single shared [`DatabasePool`].

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::{MySqlAlbumRepository, MySqlSongRepository, MySqlUserRepository};
pub use pool::DatabasePool;
pub use traits::{AlbumRepository, SongRepository, UserRepository};
