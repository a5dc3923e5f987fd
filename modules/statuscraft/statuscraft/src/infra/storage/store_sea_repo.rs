use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use statuscraft_sdk::{Product, PurchaseRequest, RequestState};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::StoreRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{product, purchase_request};

/// ORM-based implementation of the `StoreRepository` trait.
#[derive(Clone, Default)]
pub struct OrmStoreRepository;

impl OrmStoreRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoreRepository for OrmStoreRepository {
    async fn insert_product<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        product: Product,
    ) -> Result<Product, DomainError> {
        let am = product::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            image: Set(product.image.clone()),
            stock: Set(product.stock),
        };
        let _ = am.insert(conn).await.map_err(db_err)?;
        Ok(product)
    }

    async fn get_product<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Product>, DomainError> {
        let found = product::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_products<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Product>, DomainError> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Name)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn adjust_stock<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        delta: i64,
    ) -> Result<u64, DomainError> {
        let result = product::Entity::update_many()
            .col_expr(
                product::Column::Stock,
                Expr::col(product::Column::Stock).add(delta),
            )
            .filter(product::Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn insert_request<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        request: PurchaseRequest,
    ) -> Result<PurchaseRequest, DomainError> {
        let am = purchase_request::ActiveModel {
            id: Set(request.id),
            user_id: Set(request.user_id),
            product_id: Set(request.product_id),
            quantity: Set(request.quantity),
            state: Set(request.state.as_str().to_owned()),
            requested_at: Set(request.requested_at),
        };
        let _ = am.insert(conn).await.map_err(db_err)?;
        Ok(request)
    }

    async fn get_request<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<PurchaseRequest>, DomainError> {
        let found = purchase_request::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        found.map(PurchaseRequest::try_from).transpose()
    }

    async fn list_requests<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<PurchaseRequest>, DomainError> {
        let models = purchase_request::Entity::find()
            .order_by_desc(purchase_request::Column::RequestedAt)
            .all(conn)
            .await
            .map_err(db_err)?;
        models.into_iter().map(PurchaseRequest::try_from).collect()
    }

    async fn set_request_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        state: RequestState,
    ) -> Result<u64, DomainError> {
        let result = purchase_request::Entity::update_many()
            .col_expr(
                purchase_request::Column::State,
                Expr::value(state.as_str()),
            )
            .filter(purchase_request::Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
