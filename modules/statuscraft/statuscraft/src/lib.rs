//! StatusCraft Module Implementation
//!
//! The public API is defined in `statuscraft-sdk` and re-exported here.
//! Internals: domain services over repository traits, sea-orm storage,
//! figment configuration and the module wiring in [`module`].

pub use statuscraft_sdk::{
    BalanceAction, BalanceAdjustment, BalanceLog, NewProduct, NewUser, OptimisticStatus, Product,
    PurchaseRequest, RequestState, Role, Status, StatusCraftClientV1, StatusCraftError, StatusLog,
    User, UserPatch,
};

pub mod module;
pub use module::StatusCraftModule;

pub mod config;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
