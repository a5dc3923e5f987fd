use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use statuscraft_sdk::{BalanceLog, StatusLog};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::AuditLogsRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{balance_log, status_log};

/// ORM-based implementation of the `AuditLogsRepository` trait.
///
/// Only inserts and ordered reads exist here; the log tables have no
/// update or delete path.
#[derive(Clone, Default)]
pub struct OrmAuditLogsRepository;

impl OrmAuditLogsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditLogsRepository for OrmAuditLogsRepository {
    async fn insert_status_log<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        log: StatusLog,
    ) -> Result<StatusLog, DomainError> {
        let am = status_log::ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            admin_id: Set(log.admin_id),
            status: Set(log.status.as_str().to_owned()),
            recorded_at: Set(log.recorded_at),
        };
        let _ = am.insert(conn).await.map_err(db_err)?;
        Ok(log)
    }

    async fn insert_balance_log<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        log: BalanceLog,
    ) -> Result<BalanceLog, DomainError> {
        let am = balance_log::ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            admin_id: Set(log.admin_id),
            action: Set(log.action.as_str().to_owned()),
            points: Set(log.points),
            comment: Set(log.comment.clone()),
            recorded_at: Set(log.recorded_at),
        };
        let _ = am.insert(conn).await.map_err(db_err)?;
        Ok(log)
    }

    async fn list_status_logs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<StatusLog>, DomainError> {
        let models = status_log::Entity::find()
            .filter(status_log::Column::UserId.eq(user_id))
            .order_by_desc(status_log::Column::RecordedAt)
            .limit(limit)
            .all(conn)
            .await
            .map_err(db_err)?;
        models.into_iter().map(StatusLog::try_from).collect()
    }

    async fn list_balance_logs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<BalanceLog>, DomainError> {
        let models = balance_log::Entity::find()
            .filter(balance_log::Column::UserId.eq(user_id))
            .order_by_desc(balance_log::Column::RecordedAt)
            .limit(limit)
            .all(conn)
            .await
            .map_err(db_err)?;
        models.into_iter().map(BalanceLog::try_from).collect()
    }
}
