use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use statuscraft_sdk::{NewUser, Status, User, UserPatch};
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;
use crate::domain::service::{ensure_active, require_admin};
use crate::infra::storage::db::db_err;

/// User directory operations: provisioning, profile edits and the
/// enable/disable toggle. Users are never hard-deleted.
pub struct DirectoryService<U: UsersRepository> {
    db: DatabaseConnection,
    users: Arc<U>,
}

impl<U: UsersRepository> DirectoryService<U> {
    pub fn new(db: DatabaseConnection, users: Arc<U>) -> Self {
        Self { db, users }
    }

    #[instrument(skip(self), fields(user = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("Getting user by id");
        self.users
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.list(&self.db).await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Provision a new user. Admin only. The balance starts at zero and the
    /// initial status is offline.
    #[instrument(skip(self, new_user), fields(actor = %actor_id))]
    pub async fn create_user(
        &self,
        actor_id: Uuid,
        new_user: NewUser,
    ) -> Result<User, DomainError> {
        validate_new_user(&new_user)?;

        let actor = self
            .users
            .get(&self.db, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        require_admin(&actor)?;

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: new_user.id.unwrap_or_else(Uuid::now_v7),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            role: new_user.role,
            position: new_user.position,
            status: Status::Offline,
            status_comment: None,
            balance: 0,
            avatar: new_user.avatar,
            telegram: new_user.telegram,
            is_remote: new_user.is_remote,
            disabled: false,
            created_at: now,
            updated_at: now,
        };

        let created = self.users.insert(&self.db, user).await?;
        info!(user = %created.id, "Provisioned new user");
        Ok(created)
    }

    /// Patch profile fields. Admins may edit anyone; other users may only
    /// edit themselves.
    #[instrument(skip(self, patch), fields(actor = %actor_id, target = %target_user_id))]
    pub async fn update_profile(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        patch: UserPatch,
    ) -> Result<User, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let actor = self
            .users
            .get(&txn, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        if actor_id != target_user_id {
            require_admin(&actor)?;
        }

        let mut current = self
            .users
            .get(&txn, target_user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", target_user_id))?;

        if let Some(first_name) = patch.first_name {
            current.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            current.last_name = last_name;
        }
        if let Some(email) = patch.email {
            validate_email(&email)?;
            current.email = email;
        }
        if let Some(position) = patch.position {
            current.position = position;
        }
        if let Some(avatar) = patch.avatar {
            current.avatar = avatar;
        }
        if let Some(telegram) = patch.telegram {
            current.telegram = telegram;
        }
        if let Some(is_remote) = patch.is_remote {
            current.is_remote = is_remote;
        }
        current.updated_at = OffsetDateTime::now_utc();

        let updated = self.users.update(&txn, current).await?;
        txn.commit().await.map_err(db_err)?;

        info!("Profile updated");
        Ok(updated)
    }

    /// Enable or disable a user. Admin only.
    #[instrument(skip(self), fields(actor = %actor_id, target = %target_user_id, disabled))]
    pub async fn set_disabled(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        disabled: bool,
    ) -> Result<User, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let actor = self
            .users
            .get(&txn, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        require_admin(&actor)?;

        let mut target = self
            .users
            .get(&txn, target_user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", target_user_id))?;

        target.disabled = disabled;
        target.updated_at = OffsetDateTime::now_utc();

        let updated = self.users.update(&txn, target).await?;
        txn.commit().await.map_err(db_err)?;

        if disabled {
            warn!("User disabled");
        } else {
            info!("User re-enabled");
        }
        Ok(updated)
    }
}

fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
    if new_user.first_name.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            "first_name",
            "must not be empty",
        ));
    }
    if new_user.last_name.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            "last_name",
            "must not be empty",
        ));
    }
    validate_email(&new_user.email)
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(DomainError::invalid_argument(
            "email",
            format!("'{email}' is not a valid email address"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod validation_test {
    use super::*;
    use statuscraft_sdk::Role;

    fn candidate() -> NewUser {
        NewUser {
            id: None,
            first_name: "Mary".to_owned(),
            last_name: "Shelley".to_owned(),
            email: "mary@example.com".to_owned(),
            role: Role::Employee,
            position: "Writer".to_owned(),
            avatar: String::new(),
            telegram: None,
            is_remote: false,
        }
    }

    #[test]
    fn accepts_a_complete_candidate() {
        assert!(validate_new_user(&candidate()).is_ok());
    }

    #[test]
    fn rejects_blank_names() {
        let mut new_user = candidate();
        new_user.first_name = "   ".to_owned();
        assert!(matches!(
            validate_new_user(&new_user),
            Err(DomainError::InvalidArgument { field, .. }) if field == "first_name"
        ));

        let mut new_user = candidate();
        new_user.last_name = String::new();
        assert!(matches!(
            validate_new_user(&new_user),
            Err(DomainError::InvalidArgument { field, .. }) if field == "last_name"
        ));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "   ", "no-at-sign"] {
            assert!(matches!(
                validate_email(email),
                Err(DomainError::InvalidArgument { field, .. }) if field == "email"
            ));
        }
        assert!(validate_email("a@b").is_ok());
    }
}
