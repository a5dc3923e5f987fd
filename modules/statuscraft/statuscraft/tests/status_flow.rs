#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for status changes and their audit attribution.

mod common;

use common::{fresh_module, seed_user, seed_user_with};
use statuscraft::{Role, Status, StatusCraftClientV1 as _, StatusCraftError};

#[tokio::test]
async fn self_service_change_is_self_attributed() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;

    let updated = client
        .set_own_status(
            employee.id,
            Status::Vacation,
            Some("back Monday".to_owned()),
        )
        .await
        .unwrap();
    assert_eq!(updated.status, Status::Vacation);
    assert_eq!(updated.status_comment.as_deref(), Some("back Monday"));

    let logs = client.list_status_logs(employee.id, None).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, employee.id);
    assert_eq!(logs[0].admin_id, employee.id);
    assert_eq!(logs[0].status, Status::Vacation);
}

#[tokio::test]
async fn blank_comment_clears_the_stored_comment() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;

    client
        .set_own_status(employee.id, Status::Online, Some("at my desk".to_owned()))
        .await
        .unwrap();

    let updated = client
        .set_own_status(employee.id, Status::Offline, Some("   ".to_owned()))
        .await
        .unwrap();
    assert_eq!(updated.status_comment, None);

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(stored.status_comment, None);
}

#[tokio::test]
async fn admin_change_is_attributed_to_the_admin() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 0).await;

    let updated = client
        .set_user_status(admin.id, employee.id, Status::SickLeave, None)
        .await
        .unwrap();
    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.status, Status::SickLeave);

    let logs = client.list_status_logs(employee.id, None).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].admin_id, admin.id);
}

#[tokio::test]
async fn employees_may_not_change_other_users() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;
    let peer = seed_user(&module, Role::Employee, 0).await;

    let err = client
        .set_user_status(employee.id, peer.id, Status::Vacation, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StatusCraftError::PermissionDenied { actor } if actor == employee.id
    ));

    let stored = client.get_user(peer.id).await.unwrap();
    assert_eq!(stored.status, Status::Offline);
    let logs = client.list_status_logs(peer.id, None).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn disabled_users_may_not_change_status() {
    let module = fresh_module().await;
    let client = module.client();
    let suspended = seed_user_with(&module, Role::Employee, 0, |u| u.disabled = true).await;

    let err = client
        .set_own_status(suspended.id, Status::Online, None)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::Disabled { .. }));
}

#[tokio::test]
async fn optimistic_update_reconciles_against_the_stored_row() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;

    let mut view = employee.clone();
    client
        .set_own_status_optimistic(&mut view, Status::Vacation, Some("back Monday".to_owned()))
        .await
        .unwrap();

    let stored = client.get_user(employee.id).await.unwrap();
    assert_eq!(view.status, Status::Vacation);
    assert_eq!(view.status, stored.status);
    assert_eq!(view.status_comment, stored.status_comment);
    assert_eq!(view.status_comment.as_deref(), Some("back Monday"));
}

#[tokio::test]
async fn optimistic_update_rolls_back_when_the_write_fails() {
    let module = fresh_module().await;
    let client = module.client();
    let suspended = seed_user_with(&module, Role::Employee, 0, |u| {
        u.disabled = true;
        u.status = Status::Online;
        u.status_comment = Some("wrapping up".to_owned());
    })
    .await;

    let mut view = suspended.clone();
    let err = client
        .set_own_status_optimistic(&mut view, Status::Vacation, None)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::Disabled { .. }));

    // The local view reverts to what it showed before the attempt.
    assert_eq!(view.status, Status::Online);
    assert_eq!(view.status_comment.as_deref(), Some("wrapping up"));
}

#[tokio::test]
async fn audit_limit_caps_returned_history() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;

    for status in [Status::Online, Status::Offline, Status::Vacation] {
        client
            .set_own_status(employee.id, status, None)
            .await
            .unwrap();
    }

    let logs = client
        .list_status_logs(employee.id, Some(2))
        .await
        .unwrap();
    assert_eq!(logs.len(), 2);

    let all = client.list_status_logs(employee.id, None).await.unwrap();
    assert_eq!(all.len(), 3);
}
