//! Public contract for the statuscraft module.
//!
//! Transport-agnostic models, the `StatusCraftClientV1` API trait, and the
//! public error type. Consumers depend on this crate only; the backing
//! implementation lives in the `statuscraft` module crate.

pub mod api;
pub mod errors;
pub mod models;
pub mod optimistic;

pub use api::StatusCraftClientV1;
pub use errors::StatusCraftError;
pub use models::{
    normalize_comment, BalanceAction, BalanceAdjustment, BalanceLog, NewProduct, NewUser, Product,
    PurchaseRequest, RequestState, Role, Status, StatusLog, User, UserPatch,
};
pub use optimistic::OptimisticStatus;
