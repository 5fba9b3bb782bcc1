//! Canonical service implementations.
//!
//! One implementation per resource, all cache-aware on the read side.

mod album_service_impl;
mod song_service_impl;
mod user_service_impl;

pub use album_service_impl::AlbumServiceImpl;
pub use song_service_impl::SongServiceImpl;
pub use user_service_impl::UserServiceImpl;
