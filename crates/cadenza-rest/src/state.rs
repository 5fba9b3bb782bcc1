//! Application state for Axum handlers.
//!
//! Service handles are constructed once at process start and shared here;
//! there is no global mutable state.

use cadenza_service::{AlbumService, SongService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub album_service: Arc<dyn AlbumService>,
    pub song_service: Arc<dyn SongService>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        album_service: Arc<dyn AlbumService>,
        song_service: Arc<dyn SongService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            album_service,
            song_service,
            user_service,
        }
    }
}
