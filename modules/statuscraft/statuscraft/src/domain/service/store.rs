use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use statuscraft_sdk::{
    BalanceAction, NewProduct, Product, PurchaseRequest, RequestState,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::{AuditLogsRepository, StoreRepository, UsersRepository};
use crate::domain::service::ledger::apply_adjustment;
use crate::domain::service::{ensure_active, require_admin};
use crate::infra::storage::db::db_err;

/// Internal store: products and purchase requests.
///
/// This is the one caller that enforces a balance floor: approving a
/// request pre-checks the buyer's balance and rejects on insufficient
/// funds. The ledger primitive itself stays floor-free.
pub struct StoreService<U, A, S>
where
    U: UsersRepository,
    A: AuditLogsRepository,
    S: StoreRepository,
{
    db: DatabaseConnection,
    users: Arc<U>,
    audit: Arc<A>,
    store: Arc<S>,
}

impl<U, A, S> StoreService<U, A, S>
where
    U: UsersRepository,
    A: AuditLogsRepository,
    S: StoreRepository,
{
    pub fn new(db: DatabaseConnection, users: Arc<U>, audit: Arc<A>, store: Arc<S>) -> Self {
        Self {
            db,
            users,
            audit,
            store,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.store.list_products(&self.db).await
    }

    /// Add a product to the store. Admin only.
    #[instrument(skip(self, new_product), fields(actor = %actor_id))]
    pub async fn create_product(
        &self,
        actor_id: Uuid,
        new_product: NewProduct,
    ) -> Result<Product, DomainError> {
        if new_product.price <= 0 {
            return Err(DomainError::invalid_argument(
                "price",
                "must be a positive integer",
            ));
        }
        if new_product.stock < 0 {
            return Err(DomainError::invalid_argument(
                "stock",
                "must not be negative",
            ));
        }
        if new_product.name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name", "must not be empty"));
        }

        let actor = self
            .users
            .get(&self.db, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        require_admin(&actor)?;

        let product = Product {
            id: new_product.id.unwrap_or_else(Uuid::now_v7),
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            image: new_product.image,
            stock: new_product.stock,
        };

        let created = self.store.insert_product(&self.db, product).await?;
        info!(product = %created.id, "Product created");
        Ok(created)
    }

    /// Submit a purchase request; it stays pending until an admin resolves
    /// it. Disabled users may not submit requests.
    #[instrument(skip(self), fields(user = %user_id, product = %product_id))]
    pub async fn submit_request(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i64,
    ) -> Result<PurchaseRequest, DomainError> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity",
                "must be a positive integer",
            ));
        }

        let user = self
            .users
            .get(&self.db, user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;
        ensure_active(&user)?;

        let product = self
            .store
            .get_product(&self.db, product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", product_id))?;

        let request = PurchaseRequest {
            id: Uuid::now_v7(),
            user_id,
            product_id: product.id,
            quantity,
            state: RequestState::Pending,
            requested_at: OffsetDateTime::now_utc(),
        };

        let created = self.store.insert_request(&self.db, request).await?;
        info!(request = %created.id, "Purchase request submitted");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list_requests(&self) -> Result<Vec<PurchaseRequest>, DomainError> {
        self.store.list_requests(&self.db).await
    }

    /// Approve or reject a pending request. Admin only.
    ///
    /// Approval pre-checks `balance >= price * quantity`; on insufficient
    /// funds the request is marked rejected and `InsufficientBalance` is
    /// surfaced. On success the buyer is debited through the ledger routine
    /// inside the same transaction, and stock is decremented.
    #[instrument(skip(self), fields(actor = %actor_id, request = %request_id, approve))]
    pub async fn resolve_request(
        &self,
        actor_id: Uuid,
        request_id: Uuid,
        approve: bool,
    ) -> Result<PurchaseRequest, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let actor = self
            .users
            .get(&txn, actor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", actor_id))?;
        ensure_active(&actor)?;
        require_admin(&actor)?;

        let mut request = self
            .store
            .get_request(&txn, request_id)
            .await?
            .ok_or_else(|| DomainError::not_found("PurchaseRequest", request_id))?;

        if request.state != RequestState::Pending {
            return Err(DomainError::invalid_argument(
                "request",
                "already resolved",
            ));
        }

        if !approve {
            self.store
                .set_request_state(&txn, request_id, RequestState::Rejected)
                .await?;
            txn.commit().await.map_err(db_err)?;
            request.state = RequestState::Rejected;
            info!("Purchase request rejected");
            return Ok(request);
        }

        let product = self
            .store
            .get_product(&txn, request.product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", request.product_id))?;
        let buyer = self
            .users
            .get(&txn, request.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", request.user_id))?;

        let cost = product.price * request.quantity;
        if buyer.balance < cost {
            // Mirror the original flow: the request is rejected for the
            // record, and the shortfall is surfaced to the caller.
            self.store
                .set_request_state(&txn, request_id, RequestState::Rejected)
                .await?;
            txn.commit().await.map_err(db_err)?;
            warn!(
                required = cost,
                available = buyer.balance,
                "Purchase rejected: insufficient balance"
            );
            return Err(DomainError::insufficient_balance(cost, buyer.balance));
        }

        apply_adjustment(
            &txn,
            self.users.as_ref(),
            self.audit.as_ref(),
            actor_id,
            request.user_id,
            cost,
            BalanceAction::Subtract,
            Some(format!("Purchase: {}", product.name)),
        )
        .await?;

        self.store
            .adjust_stock(&txn, product.id, -request.quantity)
            .await?;
        self.store
            .set_request_state(&txn, request_id, RequestState::Approved)
            .await?;
        txn.commit().await.map_err(db_err)?;

        request.state = RequestState::Approved;
        info!(cost, "Purchase request approved");
        Ok(request)
    }
}
