//! Public models for the statuscraft module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the statuscraft module and its consumers. Serialized field names
//! use camelCase to match the stored document shape; `statusComment` is
//! omitted entirely (not serialized as an empty string) when no comment
//! applies.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Role of a user within the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

/// Work status of a user.
///
/// Flat state space: any status may move to any other status, always via an
/// explicit write. The legacy spelling `sick` is accepted on input and
/// normalized to `sick_leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Online,
    Offline,
    Vacation,
    #[serde(alias = "sick")]
    SickLeave,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Vacation => "vacation",
            Self::SickLeave => "sick_leave",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "vacation" => Some(Self::Vacation),
            "sick_leave" | "sick" => Some(Self::SickLeave),
            _ => None,
        }
    }
}

/// Direction of a balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceAction {
    Add,
    Subtract,
}

impl BalanceAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            _ => None,
        }
    }
}

/// A user entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub position: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_comment: Option<String>,
    pub balance: i64,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub disabled: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Data for provisioning a new user.
///
/// The id is optional so callers can pin it to an externally assigned
/// subject id (the auth system's UID); a fresh id is generated otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub position: String,
    pub avatar: String,
    pub telegram: Option<String>,
    pub is_remote: bool,
}

/// Partial update data for a user profile.
///
/// Status, balance and the disabled flag are deliberately absent: those
/// fields mutate only through their dedicated operations so that every
/// change leaves an audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    pub telegram: Option<Option<String>>,
    pub is_remote: Option<bool>,
}

/// Append-only record of one status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLog {
    pub id: Uuid,
    /// Subject whose status changed.
    pub user_id: Uuid,
    /// Actor who performed the change; equals `user_id` for self-service.
    pub admin_id: Uuid,
    pub status: Status,
    pub recorded_at: OffsetDateTime,
}

/// Append-only record of one balance mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub admin_id: Uuid,
    pub action: BalanceAction,
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub recorded_at: OffsetDateTime,
}

/// Result of a committed balance adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceAdjustment {
    pub user_id: Uuid,
    pub previous_balance: i64,
    pub new_balance: i64,
    /// Id of the balance log row written in the same transaction.
    pub log_id: Uuid,
}

/// A store product purchasable with loyalty points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    pub stock: i64,
}

/// Data for creating a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    pub stock: i64,
}

/// Lifecycle state of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Pending,
    Approved,
    Rejected,
}

impl RequestState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// An employee's request to purchase a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    pub state: RequestState,
    pub requested_at: OffsetDateTime,
}

/// Normalize a status/balance comment per the caller convention:
/// `None`, empty and whitespace-only comments all mean "no comment".
#[must_use]
pub fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment.filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_legacy_sick_spelling() {
        let status: Status = serde_json::from_str("\"sick\"").unwrap();
        assert_eq!(status, Status::SickLeave);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"sick_leave\"");
        assert_eq!(Status::parse("sick"), Some(Status::SickLeave));
    }

    #[test]
    fn status_round_trips_canonical_values() {
        for status in [
            Status::Online,
            Status::Offline,
            Status::Vacation,
            Status::SickLeave,
        ] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("away"), None);
    }

    #[test]
    fn user_omits_absent_status_comment() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let user = User {
            id: Uuid::nil(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Employee,
            position: "Engineer".to_owned(),
            status: Status::Online,
            status_comment: None,
            balance: 0,
            avatar: String::new(),
            telegram: None,
            is_remote: false,
            disabled: false,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("statusComment").is_none());
        assert!(json.get("firstName").is_some());
    }

    #[test]
    fn normalize_comment_drops_blank_values() {
        assert_eq!(normalize_comment(None), None);
        assert_eq!(normalize_comment(Some(String::new())), None);
        assert_eq!(normalize_comment(Some("   ".to_owned())), None);
        assert_eq!(
            normalize_comment(Some("back Monday".to_owned())),
            Some("back Monday".to_owned())
        );
    }
}
