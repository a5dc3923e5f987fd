pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;

pub mod audit_sea_repo;
pub mod store_sea_repo;
pub mod users_sea_repo;

pub use audit_sea_repo::OrmAuditLogsRepository;
pub use store_sea_repo::OrmStoreRepository;
pub use users_sea_repo::OrmUsersRepository;
