use statuscraft_sdk::StatusCraftError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Permission denied for actor {actor}")]
    PermissionDenied { actor: Uuid },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: i64, available: i64 },

    #[error("User is disabled: {id}")]
    Disabled { id: Uuid },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn permission_denied(actor: Uuid) -> Self {
        Self::PermissionDenied { actor }
    }

    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn insufficient_balance(required: i64, available: i64) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }

    pub fn disabled(id: Uuid) -> Self {
        Self::Disabled { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for StatusCraftError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::PermissionDenied { actor } => StatusCraftError::permission_denied(actor),
            DomainError::NotFound { entity, id } => StatusCraftError::not_found(entity, id),
            DomainError::InvalidArgument { field, message } => {
                StatusCraftError::invalid_argument(field, message)
            }
            DomainError::InsufficientBalance {
                required,
                available,
            } => StatusCraftError::insufficient_balance(required, available),
            DomainError::Disabled { id } => StatusCraftError::disabled(id),
            DomainError::Database { .. } => StatusCraftError::internal(),
        }
    }
}
