//! Validated JSON extractor for automatic request validation.
//!
//! Deserializes the body as JSON and runs `validator` on the result. Both
//! malformed bodies (including members outside a patch allow-list) and
//! validation failures reject with 400 and the standard `{"error"}` body.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use cadenza_core::{validation::flatten_errors, CatalogError};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError(CatalogError::validation(format!(
                    "invalid request body: {}",
                    rejection.body_text()
                )))
            })?;

        value
            .validate()
            .map_err(|errors| AppError(CatalogError::Validation(flatten_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
