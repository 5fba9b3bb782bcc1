//! OpenAPI document for the catalog API.

use crate::controllers::{album_controller, health_controller, song_controller, user_controller};
use crate::responses::{ErrorBody, MessageBody};
use cadenza_service::{
    AlbumListResponse, AlbumResponse, CreateAlbumRequest, CreateSongRequest, LoginRequest,
    PatchAlbumRequest, PatchUserRequest, RegisterRequest, SongListResponse, SongResponse,
    UpdateAlbumRequest, UpdateSongRequest, UserIdResponse, UserListResponse, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Cadenza music catalog.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cadenza Music Catalog API",
        description = "CRUD API for users, albums, and songs with a cache-aside read path"
    ),
    paths(
        album_controller::create_album,
        album_controller::delete_album,
        album_controller::update_album,
        album_controller::update_properties,
        album_controller::get_album_details,
        album_controller::get_albums,
        song_controller::create_song,
        song_controller::delete_song,
        song_controller::update_song,
        song_controller::get_song_details,
        song_controller::get_songs,
        user_controller::register,
        user_controller::login,
        user_controller::me,
        user_controller::get_users,
        user_controller::update_user_properties,
        user_controller::delete_user,
        health_controller::health_check,
    ),
    components(schemas(
        CreateAlbumRequest,
        UpdateAlbumRequest,
        PatchAlbumRequest,
        AlbumResponse,
        AlbumListResponse,
        CreateSongRequest,
        UpdateSongRequest,
        SongResponse,
        SongListResponse,
        RegisterRequest,
        LoginRequest,
        PatchUserRequest,
        UserResponse,
        UserIdResponse,
        UserListResponse,
        ErrorBody,
        MessageBody,
    )),
    tags(
        (name = "albums", description = "Album catalog"),
        (name = "songs", description = "Song catalog"),
        (name = "users", description = "Users and identity"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
