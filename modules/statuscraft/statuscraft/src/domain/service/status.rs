use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use statuscraft_sdk::{normalize_comment, Status, StatusLog, User};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::{AuditLogsRepository, UsersRepository};
use crate::domain::service::{check_comment_length, ensure_active, require_admin};
use crate::infra::storage::db::db_err;

/// Changes a user's status/comment and appends the matching status log.
///
/// The original system issued the profile write and the log insert as two
/// sequential operations; here the pair commits as a single transaction so
/// a status update cannot survive without its audit trail.
pub struct StatusService<U: UsersRepository, A: AuditLogsRepository> {
    db: DatabaseConnection,
    users: Arc<U>,
    audit: Arc<A>,
    config: ValidationConfig,
}

impl<U: UsersRepository, A: AuditLogsRepository> StatusService<U, A> {
    pub fn new(db: DatabaseConnection, users: Arc<U>, audit: Arc<A>, config: ValidationConfig) -> Self {
        Self {
            db,
            users,
            audit,
            config,
        }
    }

    /// Self-service status change; the log entry is self-attributed
    /// (`admin_id == user_id`).
    #[instrument(skip(self, comment), fields(user = %user_id, status = status.as_str()))]
    pub async fn set_own_status(
        &self,
        user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, DomainError> {
        let comment = normalize_comment(comment);
        check_comment_length(&self.config, comment.as_deref())?;

        let txn = self.db.begin().await.map_err(db_err)?;
        let user = self
            .users
            .get(&txn, user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;
        ensure_active(&user)?;

        let updated = self
            .write_status(&txn, user, status, comment, user_id)
            .await?;
        txn.commit().await.map_err(db_err)?;

        info!("Status updated");
        Ok(updated)
    }

    /// Admin-initiated status change on behalf of another user; the log
    /// entry is attributed to the acting admin.
    #[instrument(skip(self, comment), fields(actor = %actor_id, target = %target_user_id, status = status.as_str()))]
    pub async fn set_user_status(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, DomainError> {
        let comment = normalize_comment(comment);
        check_comment_length(&self.config, comment.as_deref())?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let actor = self
            .users
            .get(&txn, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        require_admin(&actor)?;

        let target = self
            .users
            .get(&txn, target_user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", target_user_id))?;

        let updated = self
            .write_status(&txn, target, status, comment, actor_id)
            .await?;
        txn.commit().await.map_err(db_err)?;

        info!("Status updated on behalf of user");
        Ok(updated)
    }

    /// Write the status fields and append the log row on the caller's
    /// transaction.
    async fn write_status<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        mut user: User,
        status: Status,
        comment: Option<String>,
        admin_id: Uuid,
    ) -> Result<User, DomainError> {
        let now = OffsetDateTime::now_utc();
        user.status = status;
        user.status_comment = comment;
        user.updated_at = now;

        let updated = self.users.update(conn, user).await?;

        self.audit
            .insert_status_log(
                conn,
                StatusLog {
                    id: Uuid::now_v7(),
                    user_id: updated.id,
                    admin_id,
                    status,
                    recorded_at: now,
                },
            )
            .await?;

        Ok(updated)
    }
}
