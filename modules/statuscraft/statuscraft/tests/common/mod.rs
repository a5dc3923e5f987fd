#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Shared test setup: an in-memory module plus user seeding helpers.
//!
//! Seeding goes straight through the users repository so tests can
//! bootstrap an admin without an already-existing admin actor.

use statuscraft::config::StatusCraftConfig;
use statuscraft::domain::repos::UsersRepository as _;
use statuscraft::infra::storage::OrmUsersRepository;
use statuscraft::{Role, Status, StatusCraftModule, User};
use time::OffsetDateTime;
use uuid::Uuid;

pub async fn fresh_module() -> StatusCraftModule {
    StatusCraftModule::init(&StatusCraftConfig::default())
        .await
        .expect("in-memory module init")
}

pub fn user_fixture(role: Role, balance: i64) -> User {
    let id = Uuid::now_v7();
    let now = OffsetDateTime::now_utc();
    User {
        id,
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: format!("user-{id}@example.com"),
        role,
        position: "Engineer".to_owned(),
        status: Status::Offline,
        status_comment: None,
        balance,
        avatar: String::new(),
        telegram: None,
        is_remote: false,
        disabled: false,
        created_at: now,
        updated_at: now,
    }
}

pub async fn seed_user(module: &StatusCraftModule, role: Role, balance: i64) -> User {
    seed_user_with(module, role, balance, |_| {}).await
}

pub async fn seed_user_with(
    module: &StatusCraftModule,
    role: Role,
    balance: i64,
    tweak: impl FnOnce(&mut User),
) -> User {
    let mut user = user_fixture(role, balance);
    tweak(&mut user);
    OrmUsersRepository::new()
        .insert(module.db(), user)
        .await
        .expect("seed user")
}
