// src/application/use_cases/mod.rs
pub mod articles;
pub mod brands;
pub mod categories;
mod list_query;

pub use list_query::ListQuery;

use crate::application::error::ApplicationError;
use crate::domain::errors::ValidationErrors;

/// Turns collected violations into the error returned to callers.
pub(crate) fn reject(operation: &'static str, errors: ValidationErrors) -> ApplicationError {
    tracing::debug!(operation, violations = errors.len(), "request rejected by validation");
    ApplicationError::Validation(errors)
}
