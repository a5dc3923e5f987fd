//! `StatusCraftClientV1` trait definition.
//!
//! This trait defines the public API for the statuscraft module (Version 1).
//! Acting identity is always passed explicitly as an `actor_id`; privileges
//! are resolved against the user directory by the implementation, never
//! trusted from the caller.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StatusCraftError;
use crate::models::{
    BalanceAction, BalanceAdjustment, BalanceLog, NewProduct, NewUser, Product, PurchaseRequest,
    Status, StatusLog, User, UserPatch,
};
use crate::optimistic::OptimisticStatus;

/// Public API trait for the statuscraft module (Version 1).
#[async_trait]
pub trait StatusCraftClientV1: Send + Sync {
    /// Fetch a single user by id.
    async fn get_user(&self, id: Uuid) -> Result<User, StatusCraftError>;

    /// List all users in the directory.
    async fn list_users(&self) -> Result<Vec<User>, StatusCraftError>;

    /// Provision a new user. Admin only.
    async fn create_user(&self, actor_id: Uuid, new_user: NewUser)
        -> Result<User, StatusCraftError>;

    /// Patch profile fields. Permitted for admins and for the subject
    /// editing their own profile.
    async fn update_profile(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        patch: UserPatch,
    ) -> Result<User, StatusCraftError>;

    /// Enable or disable a user. Admin only. Users are never hard-deleted.
    async fn set_disabled(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        disabled: bool,
    ) -> Result<User, StatusCraftError>;

    /// Set the caller's own status, with self-attribution in the audit log.
    /// A blank or absent comment clears the stored comment entirely.
    async fn set_own_status(
        &self,
        user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, StatusCraftError>;

    /// Set another user's status on their behalf. Admin only; refusal is
    /// surfaced as `PermissionDenied`, never a silent no-op.
    async fn set_user_status(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        status: Status,
        comment: Option<String>,
    ) -> Result<User, StatusCraftError>;

    /// Adjust a user's point balance and append the matching balance log in
    /// one atomic unit. Admin only; `points` must be positive. The ledger
    /// enforces no balance floor.
    async fn adjust_balance(
        &self,
        actor_id: Uuid,
        target_user_id: Uuid,
        points: i64,
        action: BalanceAction,
        comment: Option<String>,
    ) -> Result<BalanceAdjustment, StatusCraftError>;

    /// Status history for a user, newest first.
    async fn list_status_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<StatusLog>, StatusCraftError>;

    /// Balance history for a user, newest first.
    async fn list_balance_logs(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<BalanceLog>, StatusCraftError>;

    /// List store products.
    async fn list_products(&self) -> Result<Vec<Product>, StatusCraftError>;

    /// Add a product to the store. Admin only.
    async fn create_product(
        &self,
        actor_id: Uuid,
        new_product: NewProduct,
    ) -> Result<Product, StatusCraftError>;

    /// Submit a purchase request for a product.
    async fn submit_purchase_request(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i64,
    ) -> Result<PurchaseRequest, StatusCraftError>;

    /// Approve or reject a pending purchase request. Admin only. Approval
    /// pre-checks the buyer's balance and debits it through the ledger.
    async fn resolve_purchase_request(
        &self,
        actor_id: Uuid,
        request_id: Uuid,
        approve: bool,
    ) -> Result<PurchaseRequest, StatusCraftError>;

    /// Two-phase status update over a locally cached view: apply the change
    /// to `view` immediately, persist it, and roll the view back if the
    /// backing write fails. On success the view is reconciled with the
    /// persisted row.
    async fn set_own_status_optimistic(
        &self,
        view: &mut User,
        status: Status,
        comment: Option<String>,
    ) -> Result<(), StatusCraftError> {
        let guard = OptimisticStatus::apply(view, status, comment.clone());
        match self.set_own_status(view.id, status, comment).await {
            Ok(persisted) => {
                *view = persisted;
                Ok(())
            }
            Err(e) => {
                guard.rollback(view);
                Err(e)
            }
        }
    }
}
