use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use statuscraft_sdk::{Product, PurchaseRequest, RequestState};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for store products and purchase requests.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Insert a new product.
    async fn insert_product<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        product: Product,
    ) -> Result<Product, DomainError>;

    /// Find a product by id.
    async fn get_product<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Product>, DomainError>;

    /// List all products.
    async fn list_products<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Product>, DomainError>;

    /// Apply `stock = stock + delta` in the database. Returns the number of
    /// rows affected.
    async fn adjust_stock<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        delta: i64,
    ) -> Result<u64, DomainError>;

    /// Insert a new purchase request.
    async fn insert_request<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        request: PurchaseRequest,
    ) -> Result<PurchaseRequest, DomainError>;

    /// Find a purchase request by id.
    async fn get_request<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<PurchaseRequest>, DomainError>;

    /// List all purchase requests, newest first.
    async fn list_requests<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<PurchaseRequest>, DomainError>;

    /// Move a request to a new lifecycle state. Returns the number of rows
    /// affected.
    async fn set_request_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        state: RequestState,
    ) -> Result<u64, DomainError>;
}
