//! User service implementation.

use crate::cache::{cache_keys, CacheAside};
use crate::dto::{
    LoginRequest, PatchUserRequest, RegisterRequest, UserIdResponse, UserListResponse,
    UserResponse,
};
use crate::user_service::UserService;
use async_trait::async_trait;
use cadenza_core::{CatalogError, CatalogResult, PageQuery, User, UserId, ValidateRequest};
use cadenza_repository::UserRepository;
use cadenza_security::PasswordHasher;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Canonical user service.
///
/// Only the list read is cached; the identity lookup backing the access
/// gate always reads the store so a deleted user loses access immediately.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<PasswordHasher>,
    cache: CacheAside,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        cache: CacheAside,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            cache,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, request: RegisterRequest) -> CatalogResult<UserIdResponse> {
        debug!("Registering user");
        request.validate_request()?;

        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new(request.name, request.email, request.charge, password_hash);

        let saved = self.repository.insert(&user).await?;

        info!("User registered: {}", saved.id);
        Ok(UserIdResponse { id: saved.id })
    }

    async fn login(&self, request: LoginRequest) -> CatalogResult<UserIdResponse> {
        debug!("Login attempt");
        request.validate_request()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or(CatalogError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            return Err(CatalogError::InvalidCredentials);
        }

        info!("User logged in: {}", user.id);
        Ok(UserIdResponse { id: user.id })
    }

    async fn get_user(&self, id: UserId) -> CatalogResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(
        &self,
        charge: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<UserListResponse> {
        if page.is_oversized() {
            warn!(limit = page.limit, "very large user page requested");
        }

        let key = cache_keys::users_page(charge, page);
        let repository = &self.repository;

        let users = self
            .cache
            .get_or_load(&key, || async move {
                let users = repository.find_page(charge, page).await?;
                Ok(Some(
                    users.into_iter().map(UserResponse::from).collect::<Vec<_>>(),
                ))
            })
            .await?
            .unwrap_or_default();

        Ok(UserListResponse { users })
    }

    async fn patch_user(
        &self,
        id: UserId,
        request: PatchUserRequest,
    ) -> CatalogResult<UserResponse> {
        debug!("Patching user: {}", id);

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("User", id))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(charge) = request.charge {
            user.charge = charge;
        }

        let updated = self.repository.update(&user).await?;

        info!("User patched: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> CatalogResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(CatalogError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
