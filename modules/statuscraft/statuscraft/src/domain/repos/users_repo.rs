use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use statuscraft_sdk::User;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for User persistence operations.
///
/// Methods are generic over the connection so services can run them against
/// a plain connection or inside an open transaction.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Find a user by id.
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<User>, DomainError>;

    /// List all users.
    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError>;

    /// Insert a new user.
    async fn insert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: User,
    ) -> Result<User, DomainError>;

    /// Update an existing user (full-row write).
    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: User,
    ) -> Result<User, DomainError>;

    /// Apply `balance = balance + delta` as an in-database arithmetic
    /// update, so the read-modify-write never round-trips through the
    /// client. Returns the number of rows affected (0 when the user does
    /// not exist).
    async fn adjust_balance<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        delta: i64,
        updated_at: OffsetDateTime,
    ) -> Result<u64, DomainError>;
}
