//! # Cadenza Service
//!
//! Business logic for the music catalog. The centerpiece is the
//! [`cache::CacheAside`] accessor: every read endpoint prefers the cache
//! and falls back to the store, with the cache treated as a best-effort
//! optimization that can disappear without failing requests.

pub mod cache;
pub mod dto;

mod album_service;
mod r#impl;
mod song_service;
mod user_service;

pub use album_service::AlbumService;
pub use r#impl::{AlbumServiceImpl, SongServiceImpl, UserServiceImpl};
pub use song_service::SongService;
pub use user_service::UserService;

pub use dto::*;
