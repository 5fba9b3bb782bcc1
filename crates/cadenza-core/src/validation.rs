//! Request validation helpers bridging `validator` to [`CatalogError`].

use crate::{CatalogError, CatalogResult};
use validator::{Validate, ValidationErrors};

/// Extension trait mapping `validator` failures onto the validation error
/// class.
pub trait ValidateRequest: Validate {
    /// Validates the request, flattening field errors into a single message.
    fn validate_request(&self) -> CatalogResult<()> {
        self.validate()
            .map_err(|errors| CatalogError::Validation(flatten_errors(&errors)))
    }
}

impl<T: Validate> ValidateRequest for T {}

/// Flattens field-level validation errors into one human-readable line.
#[must_use]
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value for '{}'", field));
            parts.push(format!("{}: {}", field, message));
        }
    }

    parts.sort();
    parts.join("; ")
}
