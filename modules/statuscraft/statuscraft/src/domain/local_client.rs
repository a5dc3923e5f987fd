use std::sync::Arc;

use async_trait::async_trait;
use statuscraft_sdk::{
    BalanceAction, BalanceAdjustment, BalanceLog, NewProduct, NewUser, Product, PurchaseRequest,
    Status, StatusCraftClientV1, StatusCraftError, StatusLog, User, UserPatch,
};
use uuid::Uuid;

use crate::domain::repos::{AuditLogsRepository, StoreRepository, UsersRepository};
use crate::domain::service::{
    AuditService, DirectoryService, LedgerService, StatusService, StoreService,
};

/// In-process implementation of `StatusCraftClientV1` over the domain
/// services.
pub struct LocalClient<U, A, S>
where
    U: UsersRepository + 'static,
    A: AuditLogsRepository + 'static,
    S: StoreRepository + 'static,
{
    directory: Arc<DirectoryService<U>>,
    status: Arc<StatusService<U, A>>,
    ledger: Arc<LedgerService<U, A>>,
    audit: Arc<AuditService<A>>,
    store: Arc<StoreService<U, A, S>>,
}

impl<U, A, S> LocalClient<U, A, S>
where
    U: UsersRepository + 'static,
    A: AuditLogsRepository + 'static,
    S: StoreRepository + 'static,
{
    pub fn new(
        directory: Arc<DirectoryService<U>>,
        status: Arc<StatusService<U, A>>,
        ledger: Arc<LedgerService<U, A>>,
        audit: Arc<AuditService<A>>,
        store: Arc<StoreService<U, A, S>>,
    ) -> Self {
        Self {
            directory,
            status,
            ledger,
            audit,
            store,
        }
    }
}

#[async_trait]
impl<U, A, S> StatusCraftClientV1 for LocalClient<U, A, S>
where
    U: UsersRepository + 'static,
    A: AuditLogsRepository + 'static,
    S: StoreRepository + 'static,
{
    async fn get_user(&self, id: Uuid) -> Result<User, StatusCraftError> {
        self.directory.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, StatusCraftError> {
        self.directory.list_users().await.map_err(Into::into)
    }

    async fn create_user(
        &self,
        actor_id: Uuid,
        new_user: NewUser,
    ) -> Result<User, StatusCraftError> {
        self.directory
            .create_user(actor_id, new_user)
            .await
            .map_err(Into::into)
    }

    async fn update_profile(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        patch: UserPatch,
    ) -> Result<User, StatusCraftError> {
        self.directory
            .update_profile(actor_id, target_user_id, patch)
            .await
            .map_err(Into::into)
    }

    async fn set_disabled(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        disabled: bool,
    ) -> Result<User, StatusCraftError> {
        self.directory
            .set_disabled(actor_id, target_user_id, disabled)
            .await
            .map_err(Into::into)
    }

    async fn set_own_status(
        &self,
        user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, StatusCraftError> {
        self.status
            .set_own_status(user_id, status, comment)
            .await
            .map_err(Into::into)
    }

    async fn set_user_status(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, StatusCraftError> {
        self.status
            .set_user_status(actor_id, target_user_id, status, comment)
            .await
            .map_err(Into::into)
    }

    async fn adjust_balance(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        points: i64,
        action: BalanceAction,
        comment: Option<String>,
    ) -> Result<BalanceAdjustment, StatusCraftError> {
        self.ledger
            .adjust_balance(actor_id, target_user_id, points, action, comment)
            .await
            .map_err(Into::into)
    }

    async fn list_status_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<StatusLog>, StatusCraftError> {
        self.audit
            .list_status_logs(user_id, limit)
            .await
            .map_err(Into::into)
    }

    async fn list_balance_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<BalanceLog>, StatusCraftError> {
        self.audit
            .list_balance_logs(user_id, limit)
            .await
            .map_err(Into::into)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StatusCraftError> {
        self.store.list_products().await.map_err(Into::into)
    }

    async fn create_product(
        &self,
        actor_id: Uuid,
        new_product: NewProduct,
    ) -> Result<Product, StatusCraftError> {
        self.store
            .create_product(actor_id, new_product)
            .await
            .map_err(Into::into)
    }

    async fn submit_purchase_request(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i64,
    ) -> Result<PurchaseRequest, StatusCraftError> {
        self.store
            .submit_request(user_id, product_id, quantity)
            .await
            .map_err(Into::into)
    }

    async fn resolve_purchase_request(
        &self,
        actor_id: Uuid,
        request_id: Uuid,
        approve: bool,
    ) -> Result<PurchaseRequest, StatusCraftError> {
        self.store
            .resolve_request(actor_id, request_id, approve)
            .await
            .map_err(Into::into)
    }
}
