//! User controller.
//!
//! `/me` is the only gated route; it is mounted behind the identity gate
//! in the router.

use crate::{
    extractors::ValidatedJson,
    middleware::CurrentUser,
    responses::{created, ok, AppError, ApiResult, ErrorBody, MessageBody},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Extension, Json, Router,
};
use cadenza_core::{CatalogError, PageQuery, UserId};
use cadenza_service::{
    LoginRequest, PatchUserRequest, RegisterRequest, UserIdResponse, UserListResponse,
    UserResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Creates the user router (everything except the gated `/me`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/getUsers", get(get_users))
        .route("/updateUserProperties/:id", patch(update_user_properties))
        .route("/deleteUser/:id", delete(delete_user))
}

/// Query parameters for the user list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserListQuery {
    /// Page number, 1-indexed (default 1).
    pub page: Option<u32>,
    /// Page size (default 10).
    pub limit: Option<u32>,
    /// Equality filter on charge.
    pub charge: Option<String>,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserIdResponse),
        (status = 400, description = "Invalid request", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserIdResponse>), AppError> {
    let response = state.user_service.register(request).await?;
    Ok(created(response))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserIdResponse),
        (status = 400, description = "Invalid email or password", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<UserIdResponse> {
    let response = state.user_service.login(request).await?;
    ok(response)
}

/// Return the caller resolved by the identity gate, without the password.
#[utoipa::path(
    get,
    path = "/me",
    tag = "users",
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Missing or unknown user ID", body = ErrorBody)
    )
)]
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(user)
}

/// List users with optional charge filter and pagination. Served from the
/// cache for up to an hour per filter/page/limit combination.
#[utoipa::path(
    get,
    path = "/getUsers",
    tag = "users",
    params(UserListQuery),
    responses(
        (status = 200, description = "A list of users", body = UserListResponse)
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> ApiResult<UserListResponse> {
    let page = PageQuery::from_params(query.page, query.limit);
    let response = state
        .user_service
        .list_users(query.charge.as_deref(), page)
        .await?;
    ok(response)
}

/// Partially update a user (allow-listed fields only).
#[utoipa::path(
    patch,
    path = "/updateUserProperties/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = PatchUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Unknown field in request", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user_properties(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PatchUserRequest>,
) -> ApiResult<UserResponse> {
    let id = parse_user_id(&id)?;
    let response = state.user_service.patch_user(id, request).await?;
    ok(response)
}

/// Delete a user by ID.
#[utoipa::path(
    delete,
    path = "/deleteUser/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    let id = parse_user_id(&id)?;
    state.user_service.delete_user(id).await?;
    ok(MessageBody::new("User deleted successfully"))
}

fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(CatalogError::not_found("User", id)))
}
