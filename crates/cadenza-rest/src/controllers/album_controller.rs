//! Album controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, AppError, ApiResult, ErrorBody, MessageBody},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use cadenza_core::{AlbumId, CatalogError, PageQuery};
use cadenza_service::{
    AlbumListResponse, AlbumResponse, CreateAlbumRequest, PatchAlbumRequest, UpdateAlbumRequest,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Creates the album router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createAlbum", post(create_album))
        .route("/deleteAlbum/:id", delete(delete_album))
        .route("/updateAlbum/:id", put(update_album))
        .route("/updateProperties/:id", patch(update_properties))
        .route("/getAlbumDetails/:id", get(get_album_details))
        .route("/getAlbums", get(get_albums))
}

/// Query parameters for the album list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AlbumListQuery {
    /// Page number, 1-indexed (default 1).
    pub page: Option<u32>,
    /// Page size (default 10).
    pub limit: Option<u32>,
    /// Equality filter on release date.
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
}

/// Create a new album.
#[utoipa::path(
    post,
    path = "/createAlbum",
    tag = "albums",
    request_body = CreateAlbumRequest,
    responses(
        (status = 201, description = "Album created", body = AlbumResponse),
        (status = 400, description = "Invalid request", body = ErrorBody)
    )
)]
pub async fn create_album(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>), AppError> {
    let response = state.album_service.create_album(request).await?;
    Ok(created(response))
}

/// Delete an album by ID.
#[utoipa::path(
    delete,
    path = "/deleteAlbum/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    responses(
        (status = 200, description = "Album deleted", body = MessageBody),
        (status = 404, description = "Album not found", body = ErrorBody)
    )
)]
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    let id = parse_album_id(&id)?;
    state.album_service.delete_album(id).await?;
    ok(MessageBody::new("Album deleted with success"))
}

/// Fully replace an album.
#[utoipa::path(
    put,
    path = "/updateAlbum/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    request_body = UpdateAlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = AlbumResponse),
        (status = 404, description = "Album not found", body = ErrorBody)
    )
)]
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAlbumRequest>,
) -> ApiResult<AlbumResponse> {
    let id = parse_album_id(&id)?;
    let response = state.album_service.update_album(id, request).await?;
    ok(response)
}

/// Partially update an album (allow-listed fields only).
#[utoipa::path(
    patch,
    path = "/updateProperties/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    request_body = PatchAlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = AlbumResponse),
        (status = 400, description = "Unknown field in request", body = ErrorBody),
        (status = 404, description = "Album not found", body = ErrorBody)
    )
)]
pub async fn update_properties(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PatchAlbumRequest>,
) -> ApiResult<AlbumResponse> {
    let id = parse_album_id(&id)?;
    let response = state.album_service.patch_album(id, request).await?;
    ok(response)
}

/// Get the details of an album by ID. Served from the cache for up to an
/// hour after the first read.
#[utoipa::path(
    get,
    path = "/getAlbumDetails/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    responses(
        (status = 200, description = "Album details", body = AlbumResponse),
        (status = 404, description = "Album not found", body = ErrorBody)
    )
)]
pub async fn get_album_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<AlbumResponse> {
    let id = parse_album_id(&id)?;
    let response = state.album_service.get_album(id).await?;
    ok(response)
}

/// List albums with optional release-date filter and pagination. Served
/// from the cache for up to an hour per filter/page/limit combination.
#[utoipa::path(
    get,
    path = "/getAlbums",
    tag = "albums",
    params(AlbumListQuery),
    responses(
        (status = 200, description = "A list of albums", body = AlbumListResponse)
    )
)]
pub async fn get_albums(
    State(state): State<AppState>,
    Query(query): Query<AlbumListQuery>,
) -> ApiResult<AlbumListResponse> {
    let page = PageQuery::from_params(query.page, query.limit);
    let response = state
        .album_service
        .list_albums(query.release_date.as_deref(), page)
        .await?;
    ok(response)
}

/// An ID that does not parse cannot match any record.
fn parse_album_id(id: &str) -> Result<AlbumId, AppError> {
    AlbumId::parse(id).map_err(|_| AppError(CatalogError::not_found("Album", id)))
}
