//! Module wiring: connect to the database, run migrations and assemble the
//! domain services behind a `StatusCraftClientV1` client.

use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait as _;
use statuscraft_sdk::StatusCraftClientV1;
use tracing::info;

use crate::config::StatusCraftConfig;
use crate::domain::error::DomainError;
use crate::domain::local_client::LocalClient;
use crate::domain::service::{
    AuditService, DirectoryService, LedgerService, StatusService, StoreService,
};
use crate::infra::storage::db::db_err;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmAuditLogsRepository, OrmStoreRepository, OrmUsersRepository};

/// Assembled statuscraft module: an owned database connection plus the
/// in-process client over it.
pub struct StatusCraftModule {
    db: DatabaseConnection,
    client: Arc<dyn StatusCraftClientV1>,
}

impl StatusCraftModule {
    /// Connect to the configured database, apply pending migrations and
    /// wire up the services.
    pub async fn init(config: &StatusCraftConfig) -> Result<Self, DomainError> {
        let db = Database::connect(&config.database.dsn)
            .await
            .map_err(db_err)?;
        Migrator::up(&db, None).await.map_err(db_err)?;
        info!(dsn = %config.database.dsn, "statuscraft storage ready");

        Ok(Self::with_connection(db, config))
    }

    /// Build the module over an already-migrated connection.
    #[must_use]
    pub fn with_connection(db: DatabaseConnection, config: &StatusCraftConfig) -> Self {
        let users = Arc::new(OrmUsersRepository::new());
        let audit_repo = Arc::new(OrmAuditLogsRepository::new());
        let store_repo = Arc::new(OrmStoreRepository::new());

        let directory = Arc::new(DirectoryService::new(db.clone(), users.clone()));
        let status = Arc::new(StatusService::new(
            db.clone(),
            users.clone(),
            audit_repo.clone(),
            config.validation.clone(),
        ));
        let ledger = Arc::new(LedgerService::new(
            db.clone(),
            users.clone(),
            audit_repo.clone(),
            config.validation.clone(),
        ));
        let audit = Arc::new(AuditService::new(
            db.clone(),
            audit_repo.clone(),
            config.audit.clone(),
        ));
        let store = Arc::new(StoreService::new(db.clone(), users, audit_repo, store_repo));

        let client = Arc::new(LocalClient::new(directory, status, ledger, audit, store));

        Self { db, client }
    }

    /// The in-process API client.
    #[must_use]
    pub fn client(&self) -> Arc<dyn StatusCraftClientV1> {
        self.client.clone()
    }

    /// The underlying connection, mostly useful for test setup.
    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
