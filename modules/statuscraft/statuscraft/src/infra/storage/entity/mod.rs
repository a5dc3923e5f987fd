pub mod balance_log;
pub mod product;
pub mod purchase_request;
pub mod status_log;
pub mod user;
