//! Request and response DTOs.

mod album_dto;
mod song_dto;
mod user_dto;

pub use album_dto::{
    AlbumListResponse, AlbumResponse, CreateAlbumRequest, PatchAlbumRequest, UpdateAlbumRequest,
};
pub use song_dto::{CreateSongRequest, SongListResponse, SongResponse, UpdateSongRequest};
pub use user_dto::{
    LoginRequest, PatchUserRequest, RegisterRequest, UserIdResponse, UserListResponse,
    UserResponse,
};
