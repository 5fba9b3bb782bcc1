//! Song controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, AppError, ApiResult, ErrorBody, MessageBody},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use cadenza_core::{CatalogError, PageQuery, SongId};
use cadenza_service::{CreateSongRequest, SongListResponse, SongResponse, UpdateSongRequest};
use serde::Deserialize;
use utoipa::IntoParams;

/// Creates the song router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createSong", post(create_song))
        .route("/deleteSong/:id", delete(delete_song))
        .route("/updateSong/:id", put(update_song))
        .route("/getSongDetails/:id", get(get_song_details))
        .route("/getSongs", get(get_songs))
}

/// Query parameters for the song list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SongListQuery {
    /// Page number, 1-indexed (default 1).
    pub page: Option<u32>,
    /// Page size (default 10).
    pub limit: Option<u32>,
    /// Equality filter on album name.
    pub album: Option<String>,
}

/// Create a new song.
#[utoipa::path(
    post,
    path = "/createSong",
    tag = "songs",
    request_body = CreateSongRequest,
    responses(
        (status = 201, description = "Song created", body = SongResponse),
        (status = 400, description = "Invalid request", body = ErrorBody)
    )
)]
pub async fn create_song(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSongRequest>,
) -> Result<(StatusCode, Json<SongResponse>), AppError> {
    let response = state.song_service.create_song(request).await?;
    Ok(created(response))
}

/// Delete a song by ID.
#[utoipa::path(
    delete,
    path = "/deleteSong/{id}",
    tag = "songs",
    params(("id" = String, Path, description = "Song ID")),
    responses(
        (status = 200, description = "Song deleted", body = MessageBody),
        (status = 404, description = "Song not found", body = ErrorBody)
    )
)]
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    let id = parse_song_id(&id)?;
    state.song_service.delete_song(id).await?;
    ok(MessageBody::new("Song deleted with success"))
}

/// Fully replace a song.
#[utoipa::path(
    put,
    path = "/updateSong/{id}",
    tag = "songs",
    params(("id" = String, Path, description = "Song ID")),
    request_body = UpdateSongRequest,
    responses(
        (status = 200, description = "Song updated", body = SongResponse),
        (status = 404, description = "Song not found", body = ErrorBody)
    )
)]
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSongRequest>,
) -> ApiResult<SongResponse> {
    let id = parse_song_id(&id)?;
    let response = state.song_service.update_song(id, request).await?;
    ok(response)
}

/// Get the details of a song by ID. Served from the cache for up to an
/// hour after the first read.
#[utoipa::path(
    get,
    path = "/getSongDetails/{id}",
    tag = "songs",
    params(("id" = String, Path, description = "Song ID")),
    responses(
        (status = 200, description = "Song details", body = SongResponse),
        (status = 404, description = "Song not found", body = ErrorBody)
    )
)]
pub async fn get_song_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SongResponse> {
    let id = parse_song_id(&id)?;
    let response = state.song_service.get_song(id).await?;
    ok(response)
}

/// List songs with optional album filter and pagination. Served from the
/// cache for up to an hour per filter/page/limit combination.
#[utoipa::path(
    get,
    path = "/getSongs",
    tag = "songs",
    params(SongListQuery),
    responses(
        (status = 200, description = "A list of songs", body = SongListResponse)
    )
)]
pub async fn get_songs(
    State(state): State<AppState>,
    Query(query): Query<SongListQuery>,
) -> ApiResult<SongListResponse> {
    let page = PageQuery::from_params(query.page, query.limit);
    let response = state
        .song_service
        .list_songs(query.album.as_deref(), page)
        .await?;
    ok(response)
}

fn parse_song_id(id: &str) -> Result<SongId, AppError> {
    SongId::parse(id).map_err(|_| AppError(CatalogError::not_found("Song", id)))
}
