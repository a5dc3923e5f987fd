pub mod audit_repo;
pub mod store_repo;
pub mod users_repo;

pub use audit_repo::AuditLogsRepository;
pub use store_repo::StoreRepository;
pub use users_repo::UsersRepository;
