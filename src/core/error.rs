//! Typed error handling for back-office operations
//!
//! Every fallible operation in the crate returns [`AdminResult`]. The taxonomy
//! is deliberately small:
//!
//! - [`AdminError::Validation`]: a create/update payload is malformed
//! - [`AdminError::NotFound`]: the target of a mutation or lookup is absent
//! - [`AdminError::Conflict`]: a referential rule blocks the mutation
//!   (e.g. deleting a category still referenced by products)
//! - [`AdminError::Transient`]: a collaborator was unreachable
//!
//! Empty pages and zero search matches are never errors. Each variant carries
//! a stable machine code and an HTTP status so the REST layer can map errors
//! without inspecting messages.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt::Display;

/// The error type shared by the store, the services, and the controller
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminError {
    /// A create/update payload failed validation
    #[error("validation failed for '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// The entity targeted by a mutation or lookup does not exist
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// A referential rule blocks the requested mutation
    #[error("{0}")]
    Conflict(String),

    /// A collaborator was unreachable; the action may be retried
    #[error("backend unavailable: {0}")]
    Transient(String),
}

impl AdminError {
    /// Build a `NotFound` error for an entity id of any displayable type
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        AdminError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Build a `Validation` error for a single field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AdminError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Validation { .. } => StatusCode::BAD_REQUEST,
            AdminError::NotFound { .. } => StatusCode::NOT_FOUND,
            AdminError::Conflict(_) => StatusCode::CONFLICT,
            AdminError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the stable machine code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Validation { .. } => "VALIDATION_ERROR",
            AdminError::NotFound { .. } => "NOT_FOUND",
            AdminError::Conflict(_) => "CONFLICT",
            AdminError::Transient(_) => "TRANSIENT_FAILURE",
        }
    }
}

/// Error body returned by the REST layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine code for programmatic handling
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// A specialized Result type for back-office operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AdminError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product with id '42' not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_validation_display() {
        let err = AdminError::validation("price", "must be non-negative");
        assert!(err.to_string().contains("price"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_status() {
        let err = AdminError::Conflict("category is in use".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn test_transient_status() {
        let err = AdminError::Transient("store lock poisoned".to_string());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
