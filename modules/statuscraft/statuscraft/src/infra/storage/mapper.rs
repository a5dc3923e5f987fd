//! Conversions between database entities and contract models.
//!
//! Enum-valued columns are stored as strings, so entity-to-model
//! conversion is fallible: a value that no longer decodes is surfaced as a
//! database error rather than silently coerced.

use statuscraft_sdk::{
    BalanceAction, BalanceLog, Product, PurchaseRequest, RequestState, Role, Status, StatusLog,
    User,
};

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{
    balance_log, product, purchase_request, status_log, user,
};

fn decode<T>(value: Option<T>, column: &str, raw: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::database(format!("invalid {column} value '{raw}'")))
}

impl TryFrom<user::Model> for User {
    type Error = DomainError;

    fn try_from(e: user::Model) -> Result<Self, Self::Error> {
        let role = decode(Role::parse(&e.role), "role", &e.role)?;
        let status = decode(Status::parse(&e.status), "status", &e.status)?;
        Ok(Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            role,
            position: e.position,
            status,
            status_comment: e.status_comment,
            balance: e.balance,
            avatar: e.avatar,
            telegram: e.telegram,
            is_remote: e.is_remote,
            disabled: e.disabled,
            created_at: e.created_at,
            updated_at: e.updated_at,
        })
    }
}

impl TryFrom<status_log::Model> for StatusLog {
    type Error = DomainError;

    fn try_from(e: status_log::Model) -> Result<Self, Self::Error> {
        let status = decode(Status::parse(&e.status), "status", &e.status)?;
        Ok(Self {
            id: e.id,
            user_id: e.user_id,
            admin_id: e.admin_id,
            status,
            recorded_at: e.recorded_at,
        })
    }
}

impl TryFrom<balance_log::Model> for BalanceLog {
    type Error = DomainError;

    fn try_from(e: balance_log::Model) -> Result<Self, Self::Error> {
        let action = decode(BalanceAction::parse(&e.action), "action", &e.action)?;
        Ok(Self {
            id: e.id,
            user_id: e.user_id,
            admin_id: e.admin_id,
            action,
            points: e.points,
            comment: e.comment,
            recorded_at: e.recorded_at,
        })
    }
}

impl From<product::Model> for Product {
    fn from(e: product::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            price: e.price,
            image: e.image,
            stock: e.stock,
        }
    }
}

impl TryFrom<purchase_request::Model> for PurchaseRequest {
    type Error = DomainError;

    fn try_from(e: purchase_request::Model) -> Result<Self, Self::Error> {
        let state = decode(RequestState::parse(&e.state), "state", &e.state)?;
        Ok(Self {
            id: e.id,
            user_id: e.user_id,
            product_id: e.product_id,
            quantity: e.quantity,
            state,
            requested_at: e.requested_at,
        })
    }
}
