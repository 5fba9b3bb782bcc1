//! User service trait definition.

use crate::dto::{
    LoginRequest, PatchUserRequest, RegisterRequest, UserIdResponse, UserListResponse,
    UserResponse,
};
use async_trait::async_trait;
use cadenza_core::{CatalogResult, PageQuery, UserId};

/// User operations. The list read goes through the cache-aside accessor;
/// the identity lookup used by the access gate reads the store directly.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user, hashing the password before storage.
    async fn register(&self, request: RegisterRequest) -> CatalogResult<UserIdResponse>;

    /// Verifies credentials and returns the caller's identifier.
    async fn login(&self, request: LoginRequest) -> CatalogResult<UserIdResponse>;

    /// Gets a user by ID, straight from the store (used by the access gate).
    async fn get_user(&self, id: UserId) -> CatalogResult<UserResponse>;

    /// Lists users, optionally filtered by charge (cached for one hour).
    async fn list_users(
        &self,
        charge: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<UserListResponse>;

    /// Applies an allow-listed partial update.
    async fn patch_user(&self, id: UserId, request: PatchUserRequest)
        -> CatalogResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> CatalogResult<()>;
}
