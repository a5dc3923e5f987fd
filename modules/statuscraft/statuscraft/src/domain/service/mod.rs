pub mod audit;
pub mod directory;
pub mod ledger;
pub mod status;
pub mod store;

pub use audit::AuditService;
pub use directory::DirectoryService;
pub use ledger::LedgerService;
pub use status::StatusService;
pub use store::StoreService;

use statuscraft_sdk::{Role, User};

use crate::domain::error::DomainError;

/// Refuse the operation unless the actor holds the admin role.
pub(crate) fn require_admin(actor: &User) -> Result<(), DomainError> {
    if actor.role == Role::Admin {
        Ok(())
    } else {
        Err(DomainError::permission_denied(actor.id))
    }
}

/// Refuse the operation when the acting user is disabled.
pub(crate) fn ensure_active(user: &User) -> Result<(), DomainError> {
    if user.disabled {
        Err(DomainError::disabled(user.id))
    } else {
        Ok(())
    }
}

/// Reject over-long comments before anything is written.
pub(crate) fn check_comment_length(
    config: &crate::config::ValidationConfig,
    comment: Option<&str>,
) -> Result<(), DomainError> {
    if let Some(comment) = comment {
        if comment.len() > config.max_comment_length {
            return Err(DomainError::invalid_argument(
                "comment",
                format!(
                    "exceeds maximum length of {}",
                    config.max_comment_length
                ),
            ));
        }
    }
    Ok(())
}
