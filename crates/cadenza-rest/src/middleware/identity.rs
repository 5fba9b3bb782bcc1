//! Header-based identity gate.
//!
//! The caller supplies their user ID in the `Authorization` header and it
//! is resolved directly against the user collection on every request.
//! There is no signature, expiration, or revocation; this is the
//! system's bare identity scheme, not a security boundary.

use crate::{responses::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use cadenza_core::{CatalogError, UserId};
use cadenza_service::UserResponse;
use tracing::debug;

/// The resolved caller, attached to request extensions by the gate.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserResponse);

/// Resolves the `Authorization: <userId>` header against the store.
///
/// Missing, malformed, or unknown IDs reject with 401; a store fault is a
/// 500. The lookup deliberately bypasses the cache so that a deleted user
/// is locked out immediately.
pub async fn identity_gate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(raw_id) = header else {
        return Err(AppError(CatalogError::unauthorized(
            "Access denied. No user ID provided.",
        )));
    };

    let user_id = UserId::parse(raw_id.trim())
        .map_err(|_| AppError(CatalogError::unauthorized("Invalid user ID.")))?;

    match state.user_service.get_user(user_id).await {
        Ok(user) => {
            debug!("Authenticated user: {}", user.id);
            request.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(request).await)
        }
        Err(CatalogError::NotFound { .. }) => {
            Err(AppError(CatalogError::unauthorized("User not found.")))
        }
        Err(err) => Err(AppError(err)),
    }
}
