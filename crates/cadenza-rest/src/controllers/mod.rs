//! HTTP controllers, one per resource.

pub mod album_controller;
pub mod health_controller;
pub mod song_controller;
pub mod user_controller;
