use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use statuscraft_sdk::{normalize_comment, BalanceAction, BalanceAdjustment, BalanceLog};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::{AuditLogsRepository, UsersRepository};
use crate::domain::service::{check_comment_length, ensure_active, require_admin};
use crate::infra::storage::db::db_err;

/// Mutates a user's point balance and appends the matching audit record in
/// one all-or-nothing transaction. The ledger enforces no balance floor;
/// that is caller policy (see the store service).
pub struct LedgerService<U: UsersRepository, A: AuditLogsRepository> {
    db: DatabaseConnection,
    users: Arc<U>,
    audit: Arc<A>,
    config: ValidationConfig,
}

impl<U: UsersRepository, A: AuditLogsRepository> LedgerService<U, A> {
    pub fn new(db: DatabaseConnection, users: Arc<U>, audit: Arc<A>, config: ValidationConfig) -> Self {
        Self {
            db,
            users,
            audit,
            config,
        }
    }

    /// Adjust `target_user_id`'s balance by `points` in the given direction
    /// and record one balance log row, committed together or not at all.
    #[instrument(skip(self, comment), fields(actor = %actor_id, target = %target_user_id))]
    pub async fn adjust_balance(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        points: i64,
        action: BalanceAction,
        comment: Option<String>,
    ) -> Result<BalanceAdjustment, DomainError> {
        let comment = normalize_comment(comment);
        check_comment_length(&self.config, comment.as_deref())?;

        let txn = self.db.begin().await.map_err(db_err)?;
        let adjustment = apply_adjustment(
            &txn,
            self.users.as_ref(),
            self.audit.as_ref(),
            actor_id,
            target_user_id,
            points,
            action,
            comment,
        )
        .await?;
        txn.commit().await.map_err(db_err)?;

        info!(
            new_balance = adjustment.new_balance,
            "Balance adjustment committed"
        );
        Ok(adjustment)
    }
}

/// Core ledger routine, shared with the store service so a purchase debit
/// joins the caller's transaction instead of opening its own.
///
/// Verifies actor privilege and target existence, applies the balance
/// arithmetic inside the database, and appends the balance log row. The
/// caller owns the transaction boundary.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn apply_adjustment<C, U, A>(
    conn: &C,
    users: &U,
    audit: &A,
    actor_id: Uuid,
    target_user_id: Uuid,
    points: i64,
    action: BalanceAction,
    comment: Option<String>,
) -> Result<BalanceAdjustment, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    U: UsersRepository,
    A: AuditLogsRepository,
{
    if points <= 0 {
        return Err(DomainError::invalid_argument(
            "points",
            "must be a positive integer",
        ));
    }

    let actor = users
        .get(conn, actor_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", actor_id))?;
    ensure_active(&actor)?;
    require_admin(&actor)?;

    let target = users
        .get(conn, target_user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", target_user_id))?;

    let delta = match action {
        BalanceAction::Add => points,
        BalanceAction::Subtract => -points,
    };

    let now = OffsetDateTime::now_utc();
    let updated = users
        .adjust_balance(conn, target_user_id, delta, now)
        .await?;
    if updated == 0 {
        return Err(DomainError::not_found("User", target_user_id));
    }

    debug!(points, action = action.as_str(), "Applied balance arithmetic");

    let log = audit
        .insert_balance_log(
            conn,
            BalanceLog {
                id: Uuid::now_v7(),
                user_id: target_user_id,
                admin_id: actor_id,
                action,
                points,
                comment,
                recorded_at: now,
            },
        )
        .await?;

    Ok(BalanceAdjustment {
        user_id: target_user_id,
        previous_balance: target.balance,
        new_balance: target.balance + delta,
        log_id: log.id,
    })
}
