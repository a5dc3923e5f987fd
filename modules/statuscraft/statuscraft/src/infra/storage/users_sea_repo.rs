use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use statuscraft_sdk::User;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::user::{
    ActiveModel as UserAM, Column, Entity as UserEntity,
};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone, Default)]
pub struct OrmUsersRepository;

impl OrmUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn to_active_model(user: &User) -> UserAM {
    UserAM {
        id: Set(user.id),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        email: Set(user.email.clone()),
        role: Set(user.role.as_str().to_owned()),
        position: Set(user.position.clone()),
        status: Set(user.status.as_str().to_owned()),
        status_comment: Set(user.status_comment.clone()),
        balance: Set(user.balance),
        avatar: Set(user.avatar.clone()),
        telegram: Set(user.telegram.clone()),
        is_remote: Set(user.is_remote),
        disabled: Set(user.disabled),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id).one(conn).await.map_err(db_err)?;
        found.map(User::try_from).transpose()
    }

    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError> {
        let models = UserEntity::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(conn)
            .await
            .map_err(db_err)?;
        models.into_iter().map(User::try_from).collect()
    }

    async fn insert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: User,
    ) -> Result<User, DomainError> {
        let _ = to_active_model(&user).insert(conn).await.map_err(db_err)?;
        Ok(user)
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: User,
    ) -> Result<User, DomainError> {
        let exists = UserEntity::find_by_id(user.id)
            .one(conn)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::not_found("User", user.id));
        }

        let _ = to_active_model(&user).update(conn).await.map_err(db_err)?;
        Ok(user)
    }

    async fn adjust_balance<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        delta: i64,
        updated_at: OffsetDateTime,
    ) -> Result<u64, DomainError> {
        let result = UserEntity::update_many()
            .col_expr(Column::Balance, Expr::col(Column::Balance).add(delta))
            .col_expr(Column::UpdatedAt, Expr::value(updated_at))
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
