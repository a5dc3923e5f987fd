//! Public error types for the statuscraft module.
//!
//! These errors are safe to expose to other modules and consumers. Internal
//! failure detail (database errors and the like) is collapsed to `Internal`.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can be returned by the `StatusCraftClientV1` API.
#[derive(Error, Debug, Clone)]
pub enum StatusCraftError {
    /// The acting user lacks the privilege required for the operation.
    #[error("Permission denied for actor {actor}")]
    PermissionDenied { actor: Uuid },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// A supplied argument is malformed or out of range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// The subject's balance does not cover the requested debit.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: i64, available: i64 },

    /// The acting user is disabled and may not perform mutations.
    #[error("User is disabled: {id}")]
    Disabled { id: Uuid },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl StatusCraftError {
    #[must_use]
    pub fn permission_denied(actor: Uuid) -> Self {
        Self::PermissionDenied { actor }
    }

    #[must_use]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn insufficient_balance(required: i64, available: i64) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }

    #[must_use]
    pub fn disabled(id: Uuid) -> Self {
        Self::Disabled { id }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
