use std::sync::Arc;

use sea_orm::DatabaseConnection;
use statuscraft_sdk::{BalanceLog, StatusLog};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::AuditQueryConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::AuditLogsRepository;

/// Read-only audit queries: a user's own log streams, newest first, with a
/// configured result-count cap. Not part of the mutation contract.
pub struct AuditService<A: AuditLogsRepository> {
    db: DatabaseConnection,
    audit: Arc<A>,
    config: AuditQueryConfig,
}

impl<A: AuditLogsRepository> AuditService<A> {
    pub fn new(db: DatabaseConnection, audit: Arc<A>, config: AuditQueryConfig) -> Self {
        Self { db, audit, config }
    }

    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn list_status_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<StatusLog>, DomainError> {
        let limit = self.config.effective_limit(limit);
        let logs = self.audit.list_status_logs(&self.db, user_id, limit).await?;
        debug!("Fetched {} status log rows", logs.len());
        Ok(logs)
    }

    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn list_balance_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<BalanceLog>, DomainError> {
        let limit = self.config.effective_limit(limit);
        let logs = self
            .audit
            .list_balance_logs(&self.db, user_id, limit)
            .await?;
        debug!("Fetched {} balance log rows", logs.len());
        Ok(logs)
    }
}
