use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use statuscraft_sdk::{BalanceLog, StatusLog};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for the append-only audit streams.
///
/// Log rows are inserted exactly once per applied mutation and never
/// updated or deleted.
#[async_trait]
pub trait AuditLogsRepository: Send + Sync {
    /// Append one status log row.
    async fn insert_status_log<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        log: StatusLog,
    ) -> Result<StatusLog, DomainError>;

    /// Append one balance log row.
    async fn insert_balance_log<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        log: BalanceLog,
    ) -> Result<BalanceLog, DomainError>;

    /// Status history for a user, newest first, capped at `limit` rows.
    async fn list_status_logs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<StatusLog>, DomainError>;

    /// Balance history for a user, newest first, capped at `limit` rows.
    async fn list_balance_logs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<BalanceLog>, DomainError>;
}
