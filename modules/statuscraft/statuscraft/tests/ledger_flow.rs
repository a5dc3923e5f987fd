#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for balance adjustments and their audit trail.

mod common;

use common::{fresh_module, seed_user, seed_user_with};
use statuscraft::{BalanceAction, Role, StatusCraftClientV1 as _, StatusCraftError};
use uuid::Uuid;

#[tokio::test]
async fn adjustments_accumulate_and_leave_an_audit_trail() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 50).await;

    let first = client
        .adjust_balance(
            admin.id,
            employee.id,
            100,
            BalanceAction::Add,
            Some("quarterly bonus".to_owned()),
        )
        .await
        .unwrap();
    assert_eq!(first.previous_balance, 50);
    assert_eq!(first.new_balance, 150);

    let second = client
        .adjust_balance(admin.id, employee.id, 30, BalanceAction::Subtract, None)
        .await
        .unwrap();
    assert_eq!(second.previous_balance, 150);
    assert_eq!(second.new_balance, 120);

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, 120);

    let logs = client.list_balance_logs(employee.id, None).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs
        .iter()
        .all(|log| log.user_id == employee.id && log.admin_id == admin.id));

    // Replaying the log deltas over the starting balance reproduces the
    // stored balance.
    let replayed: i64 = logs
        .iter()
        .map(|log| match log.action {
            BalanceAction::Add => log.points,
            BalanceAction::Subtract => -log.points,
        })
        .sum();
    assert_eq!(50 + replayed, stored.balance);
}

#[tokio::test]
async fn non_positive_points_change_nothing() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 50).await;

    for points in [0, -10] {
        let err = client
            .adjust_balance(admin.id, employee.id, points, BalanceAction::Add, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StatusCraftError::InvalidArgument { .. }));
    }

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, 50);
    let logs = client.list_balance_logs(employee.id, None).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn only_active_admins_may_adjust() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 50).await;
    let peer = seed_user(&module, Role::Employee, 0).await;
    let suspended_admin =
        seed_user_with(&module, Role::Admin, 0, |u| u.disabled = true).await;

    let err = client
        .adjust_balance(peer.id, employee.id, 10, BalanceAction::Add, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StatusCraftError::PermissionDenied { actor } if actor == peer.id
    ));

    let err = client
        .adjust_balance(suspended_admin.id, employee.id, 10, BalanceAction::Add, None)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::Disabled { .. }));

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, 50);
}

#[tokio::test]
async fn unknown_target_is_reported_with_no_side_effects() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;

    let missing = Uuid::now_v7();
    let err = client
        .adjust_balance(admin.id, missing, 10, BalanceAction::Add, None)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::NotFound { .. }));

    let logs = client.list_balance_logs(missing, None).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn oversized_comment_is_rejected_before_writing() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 50).await;

    let err = client
        .adjust_balance(
            admin.id,
            employee.id,
            10,
            BalanceAction::Add,
            Some("x".repeat(501)),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StatusCraftError::InvalidArgument { field, .. } if field == "comment"
    ));

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, 50);
}

#[tokio::test]
async fn concurrent_adjustments_do_not_lose_updates() {
    let module = fresh_module().await;
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 50).await;

    let add_client = module.client();
    let sub_client = module.client();
    let (admin_id, employee_id) = (admin.id, employee.id);

    let add = tokio::spawn(async move {
        add_client
            .adjust_balance(admin_id, employee_id, 100, BalanceAction::Add, None)
            .await
    });
    let subtract = tokio::spawn(async move {
        sub_client
            .adjust_balance(admin_id, employee_id, 30, BalanceAction::Subtract, None)
            .await
    });

    add.await.unwrap().unwrap();
    subtract.await.unwrap().unwrap();

    let client = module.client();
    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, 120);
    let logs = client.list_balance_logs(employee.id, None).await.unwrap();
    assert_eq!(logs.len(), 2);
}

#[tokio::test]
async fn balance_may_go_negative_through_the_ledger() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 10).await;

    let adjustment = client
        .adjust_balance(
            admin.id,
            employee.id,
            40,
            BalanceAction::Subtract,
            Some("equipment damage".to_owned()),
        )
        .await
        .unwrap();
    assert_eq!(adjustment.new_balance, -30);

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.balance, -30);
}
